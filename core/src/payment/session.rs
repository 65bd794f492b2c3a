// kundali/src/payment/session.rs

use crate::error::{FlowError, FlowResult};
use crate::form::FormData;
use serde::Serialize;
use serde_json::Value;

/// Body POSTed to the payment-session endpoint: the form record flattened
/// alongside the fixed order terms.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
  #[serde(flatten)]
  pub form: FormData,
  pub currency: String,
  /// Whole currency units.
  pub amount: u32,
  /// Always true: the review stage refuses to build a request without the
  /// consent toggle set.
  pub consent: bool,
}

impl OrderRequest {
  pub fn new(form: FormData, currency: impl Into<String>, amount: u32) -> Self {
    Self {
      form,
      currency: currency.into(),
      amount,
      consent: true,
    }
  }
}

/// Short-lived id/key pair for one gateway widget session. Owned by a single
/// payment attempt and discarded once the widget opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSession {
  pub order_id: String,
  pub gateway_key: String,
}

impl PaymentSession {
  /// Extracts a session from a parsed endpoint response, tolerating the
  /// field spellings seen across gateway backends. Each absence is its own
  /// fatal condition so the user-facing message names what was missing.
  pub fn from_response(body: &Value) -> FlowResult<Self> {
    let order_id =
      first_string(body, &["order_id", "orderId", "id"]).ok_or(FlowError::MissingOrderId)?;
    let gateway_key = first_string(body, &["razorpay_key", "key", "razorpay_key_id"])
      .ok_or(FlowError::MissingGatewayKey)?;
    Ok(Self { order_id, gateway_key })
  }
}

/// First present field under any of the candidate names, as a string.
/// Numeric ids are accepted and stringified.
fn first_string(body: &Value, names: &[&str]) -> Option<String> {
  for name in names {
    match body.get(name) {
      Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
      Some(Value::Number(n)) => return Some(n.to_string()),
      _ => {}
    }
  }
  None
}
