// tests/flow_controller_tests.rs
mod common;

use common::setup_tracing;
use kundali::{FlowController, FlowEvent, Stage};

#[test]
fn flow_starts_on_the_form() {
  setup_tracing();
  let controller = FlowController::new();
  assert_eq!(controller.stage(), Stage::Form);
}

#[test]
fn happy_path_walks_form_review_success_and_back() {
  let mut c = FlowController::new();

  assert_eq!(c.dispatch(FlowEvent::Next), Stage::Review);
  assert_eq!(c.dispatch(FlowEvent::PaymentSucceeded), Stage::Success);
  assert_eq!(c.dispatch(FlowEvent::NewOrder), Stage::Form);
}

#[test]
fn review_can_return_to_the_form() {
  let mut c = FlowController::new();
  c.dispatch(FlowEvent::Next);

  assert_eq!(c.dispatch(FlowEvent::Back), Stage::Form);
}

#[test]
fn verification_failure_routes_to_the_failure_stage() {
  let mut c = FlowController::new();
  c.dispatch(FlowEvent::Next);

  assert_eq!(c.dispatch(FlowEvent::PaymentFailed), Stage::Failure);
}

#[test]
fn failure_offers_retry_back_to_review_and_new_order_to_form() {
  let mut c = FlowController::new();
  c.dispatch(FlowEvent::Next);
  c.dispatch(FlowEvent::PaymentFailed);

  assert_eq!(c.dispatch(FlowEvent::Retry), Stage::Review);

  c.dispatch(FlowEvent::PaymentFailed);
  assert_eq!(c.dispatch(FlowEvent::NewOrder), Stage::Form);
}

#[test]
fn terminal_stages_are_re_enterable_not_final() {
  let mut c = FlowController::new();

  for _ in 0..3 {
    c.dispatch(FlowEvent::Next);
    c.dispatch(FlowEvent::PaymentSucceeded);
    assert_eq!(c.stage(), Stage::Success);
    assert_eq!(c.dispatch(FlowEvent::NewOrder), Stage::Form);
  }
}

#[test]
fn events_outside_the_table_are_no_ops() {
  let mut c = FlowController::new();

  // None of these are wired from the form stage.
  assert_eq!(c.dispatch(FlowEvent::Back), Stage::Form);
  assert_eq!(c.dispatch(FlowEvent::PaymentSucceeded), Stage::Form);
  assert_eq!(c.dispatch(FlowEvent::Retry), Stage::Form);
  assert_eq!(c.dispatch(FlowEvent::NewOrder), Stage::Form);

  c.dispatch(FlowEvent::Next);
  assert_eq!(c.dispatch(FlowEvent::Next), Stage::Review);
  assert_eq!(c.dispatch(FlowEvent::Retry), Stage::Review);
}

#[test]
fn unknown_stage_names_parse_to_the_form() {
  assert_eq!(Stage::parse("review"), Stage::Review);
  assert_eq!(Stage::parse("success"), Stage::Success);
  assert_eq!(Stage::parse("failure"), Stage::Failure);
  assert_eq!(Stage::parse("form"), Stage::Form);

  assert_eq!(Stage::parse("cart"), Stage::Form);
  assert_eq!(Stage::parse(""), Stage::Form);
  assert_eq!(Stage::parse("SUCCESS"), Stage::Form);
}
