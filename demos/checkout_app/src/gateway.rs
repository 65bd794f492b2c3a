// demos/checkout_app/src/gateway.rs

use async_trait::async_trait;
use kundali::{GatewayPayload, PaymentWidget, WidgetConfig, WidgetOutcome};
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

/// How the simulated widget should resolve each opened session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptedOutcome {
  /// Complete with a well-formed payload.
  Pay,
  /// Complete with a payload whose signature the backend will reject.
  PayWithBadSignature,
  /// Close the widget without paying.
  Dismiss,
}

impl ScriptedOutcome {
  /// Reads `CHECKOUT_SIMULATE` (`pay` | `bad-signature` | `dismiss`),
  /// defaulting to a successful payment.
  pub fn from_env() -> Self {
    match std::env::var("CHECKOUT_SIMULATE").as_deref() {
      Ok("dismiss") => ScriptedOutcome::Dismiss,
      Ok("bad-signature") => ScriptedOutcome::PayWithBadSignature,
      _ => ScriptedOutcome::Pay,
    }
  }
}

/// Stands in for the gateway's browser embed: pauses as if the user were
/// filling in card details, then resolves with the scripted outcome.
pub struct ScriptedWidget {
  outcome: ScriptedOutcome,
}

impl ScriptedWidget {
  pub fn new(outcome: ScriptedOutcome) -> Self {
    Self { outcome }
  }
}

#[async_trait]
impl PaymentWidget for ScriptedWidget {
  async fn open(&self, config: WidgetConfig) -> WidgetOutcome {
    info!(
      order_id = %config.order_id,
      amount = config.amount,
      currency = %config.currency,
      "Gateway widget opened for {} <{}>.",
      config.prefill_name,
      config.prefill_email
    );
    tokio::time::sleep(Duration::from_millis(300)).await; // Simulated user interaction

    match self.outcome {
      ScriptedOutcome::Dismiss => {
        info!("Simulated user dismissed the widget.");
        WidgetOutcome::Dismissed
      }
      ScriptedOutcome::Pay => WidgetOutcome::Completed(GatewayPayload {
        razorpay_payment_id: format!("pay_sim_{}", Uuid::new_v4().simple()),
        razorpay_order_id: config.order_id,
        razorpay_signature: format!("sig_sim_{}", Uuid::new_v4().simple()),
      }),
      ScriptedOutcome::PayWithBadSignature => WidgetOutcome::Completed(GatewayPayload {
        razorpay_payment_id: format!("pay_sim_{}", Uuid::new_v4().simple()),
        razorpay_order_id: config.order_id,
        razorpay_signature: "invalid_test_signature".to_string(),
      }),
    }
  }
}
