// kundali/src/payment/widget.rs

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The gateway's completion payload, handed to verification and persisted
/// verbatim on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayPayload {
  pub razorpay_payment_id: String,
  pub razorpay_order_id: String,
  pub razorpay_signature: String,
}

/// Everything the embedded widget needs for one payment attempt.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
  pub key: String,
  /// Display amount in minor units (paise).
  pub amount: u32,
  pub currency: String,
  pub order_id: String,
  pub name: String,
  pub description: String,
  pub prefill_name: String,
  pub prefill_email: String,
}

/// How one opened widget session resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetOutcome {
  /// The user completed payment inside the widget.
  Completed(GatewayPayload),
  /// The user dismissed the widget without completing; the attempt is
  /// simply abandoned.
  Dismissed,
}

/// Injected capability standing in for the ambient gateway embed.
///
/// Contract: `open` resolves exactly once per call, to `Completed` or
/// `Dismissed`, after the user finishes interacting with the widget.
#[async_trait]
pub trait PaymentWidget: Send + Sync {
  async fn open(&self, config: WidgetConfig) -> WidgetOutcome;
}
