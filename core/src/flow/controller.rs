// kundali/src/flow/controller.rs

use crate::flow::stage::Stage;
use tracing::{event, Level};

/// User-initiated transitions. There are no automatic or timed ones; every
/// event corresponds to an explicit action on the live stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEvent {
  /// Form submission passed validation and was persisted.
  Next,
  /// Leave review and return to the form.
  Back,
  /// Verification confirmed the payment.
  PaymentSucceeded,
  /// Verification rejected the payment (or was unreachable).
  PaymentFailed,
  /// Try the payment again with the data already captured.
  Retry,
  /// Discard the order state and start over.
  NewOrder,
}

/// The wizard's transition table, kept in one place instead of scattered
/// across per-stage callbacks.
#[derive(Debug, Clone, Default)]
pub struct FlowController {
  stage: Stage,
}

impl FlowController {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn stage(&self) -> Stage {
    self.stage
  }

  /// Applies one event. Pairs outside the table are logged no-ops: the
  /// event simply cannot occur on a stage that does not render its trigger.
  pub fn dispatch(&mut self, event: FlowEvent) -> Stage {
    use FlowEvent::*;
    use Stage::*;

    let next = match (self.stage, event) {
      (Form, Next) => Review,
      (Review, Back) => Form,
      (Review, PaymentSucceeded) => Success,
      (Review, PaymentFailed) => Failure,
      (Success, NewOrder) => Form,
      (Failure, Retry) => Review,
      (Failure, NewOrder) => Form,
      (stage, event) => {
        event!(Level::WARN, %stage, ?event, "Ignoring event not valid for the current stage.");
        stage
      }
    };

    if next != self.stage {
      event!(Level::INFO, from = %self.stage, to = %next, "Stage transition.");
      self.stage = next;
    }
    next
  }
}
