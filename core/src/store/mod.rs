// kundali/src/store/mod.rs

//! Browser-local persistence, modeled as an injected string key-value store.
//!
//! The flow only ever touches three keys, all cleared together when a new
//! order starts. Reads and writes are synchronous; there is no preemption
//! between a handler's read and its subsequent write of a key.

pub mod memory;

pub use memory::MemoryStore;

use crate::error::{FlowError, FlowResult};
use crate::form::FormData;
use crate::payment::GatewayPayload;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{event, warn, Level};

/// Storage keys, shared with the deployed storefront.
pub mod keys {
  pub const FORM: &str = "astrologyForm";
  pub const PAYMENT_SUCCESS: &str = "paymentSuccess";
  pub const PAYMENT_DETAILS: &str = "paymentDetails";
}

/// Minimal synchronous key-value contract the flow persists through.
/// Implementations must tolerate concurrent readers but the flow itself
/// never overlaps a read and a write of the same key.
pub trait KeyValueStore: Send + Sync {
  fn get(&self, key: &str) -> Option<String>;
  fn put(&self, key: &str, value: String);
  fn remove(&self, key: &str);
}

/// Result of a verified payment, as read back by the success stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentOutcome {
  pub success: bool,
  /// Raw gateway completion payload, kept opaque for receipts/support.
  pub raw_payload: String,
}

/// Typed view over the store: JSON round-tripping for the form record and
/// the payment outcome flags.
#[derive(Clone)]
pub struct CheckoutStore {
  inner: Arc<dyn KeyValueStore>,
}

impl CheckoutStore {
  pub fn new(inner: Arc<dyn KeyValueStore>) -> Self {
    Self { inner }
  }

  pub fn in_memory() -> Self {
    Self::new(Arc::new(MemoryStore::default()))
  }

  /// The persisted form record, if a submission completed. A value that no
  /// longer decodes is treated as absent rather than poisoning the flow.
  pub fn form(&self) -> Option<FormData> {
    let raw = self.inner.get(keys::FORM)?;
    match serde_json::from_str(&raw) {
      Ok(form) => Some(form),
      Err(e) => {
        warn!(error = %e, "Stored form record is not decodable; ignoring it.");
        None
      }
    }
  }

  pub fn save_form(&self, form: &FormData) -> FlowResult<()> {
    let encoded = serde_json::to_string(form).map_err(|source| FlowError::Encode { source })?;
    self.inner.put(keys::FORM, encoded);
    event!(Level::DEBUG, "Form record persisted.");
    Ok(())
  }

  pub fn payment_succeeded(&self) -> bool {
    self
      .inner
      .get(keys::PAYMENT_SUCCESS)
      .map(|v| v == "true")
      .unwrap_or(false)
  }

  /// Writes the verified outcome: details first, then the success flag, so a
  /// set flag always has its payload alongside.
  pub fn record_payment(&self, payload: &GatewayPayload) -> FlowResult<()> {
    let raw = serde_json::to_string(payload).map_err(|source| FlowError::Encode { source })?;
    self.inner.put(keys::PAYMENT_DETAILS, raw);
    self.inner.put(keys::PAYMENT_SUCCESS, "true".to_string());
    event!(Level::INFO, "Payment outcome persisted.");
    Ok(())
  }

  pub fn payment_outcome(&self) -> Option<PaymentOutcome> {
    if !self.payment_succeeded() {
      return None;
    }
    let raw_payload = self.inner.get(keys::PAYMENT_DETAILS)?;
    Some(PaymentOutcome {
      success: true,
      raw_payload,
    })
  }

  /// Clears the form draft, success flag, and payment details together.
  pub fn clear_order(&self) {
    self.inner.remove(keys::FORM);
    self.inner.remove(keys::PAYMENT_SUCCESS);
    self.inner.remove(keys::PAYMENT_DETAILS);
    event!(Level::INFO, "Order state cleared for a new order.");
  }
}
