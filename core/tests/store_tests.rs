// tests/store_tests.rs
mod common;

use common::*;
use kundali::store::keys;
use kundali::{CheckoutStore, KeyValueStore, MemoryStore};
use std::sync::Arc;

#[test]
fn form_round_trips_losslessly() {
  setup_tracing();
  let store = memory_store();
  let form = sample_form();

  store.save_form(&form).expect("encoding a valid record cannot fail");
  let reloaded = store.form().expect("record was just persisted");

  assert_eq!(reloaded, form);
}

#[test]
fn absent_form_reads_as_none() {
  let store = memory_store();
  assert!(store.form().is_none());
}

#[test]
fn undecodable_form_record_is_ignored_not_fatal() {
  let raw = Arc::new(MemoryStore::new());
  raw.put(keys::FORM, "{not json".to_string());
  let store = CheckoutStore::new(raw);

  assert!(store.form().is_none());
}

#[test]
fn record_payment_sets_details_and_flag() {
  let raw = Arc::new(MemoryStore::new());
  let store = CheckoutStore::new(Arc::clone(&raw) as Arc<dyn KeyValueStore>);
  let payload = sample_payload();

  assert!(!store.payment_succeeded());
  store.record_payment(&payload).expect("payload encodes");

  assert!(store.payment_succeeded());
  let outcome = store.payment_outcome().expect("outcome was just recorded");
  assert!(outcome.success);
  assert!(outcome.raw_payload.contains("pay_test_001"));
  assert_eq!(raw.get(keys::PAYMENT_SUCCESS).as_deref(), Some("true"));
}

#[test]
fn outcome_is_absent_until_the_flag_is_set() {
  let raw = Arc::new(MemoryStore::new());
  // Details without the flag must not read as a success.
  raw.put(keys::PAYMENT_DETAILS, "{}".to_string());
  let store = CheckoutStore::new(raw);

  assert!(store.payment_outcome().is_none());
}

#[test]
fn clear_order_removes_all_three_keys_together() {
  let raw = Arc::new(MemoryStore::new());
  let store = CheckoutStore::new(Arc::clone(&raw) as Arc<dyn KeyValueStore>);

  store.save_form(&sample_form()).unwrap();
  store.record_payment(&sample_payload()).unwrap();

  store.clear_order();

  assert!(raw.get(keys::FORM).is_none());
  assert!(raw.get(keys::PAYMENT_SUCCESS).is_none());
  assert!(raw.get(keys::PAYMENT_DETAILS).is_none());
}

#[test]
fn fresh_submission_overwrites_the_previous_record() {
  let store = memory_store();
  store.save_form(&sample_form()).unwrap();

  let mut second = sample_form();
  second.name = "Ravi Kumar".to_string();
  store.save_form(&second).unwrap();

  assert_eq!(store.form().unwrap().name, "Ravi Kumar");
}
