// kundali/src/payment/client.rs

use crate::config::FlowConfig;
use crate::error::{FlowError, FlowResult};
use crate::payment::session::{OrderRequest, PaymentSession};
use crate::payment::widget::GatewayPayload;
use serde_json::{json, Value};
use tracing::{event, instrument, Level};

/// HTTP client for the two payment endpoints. Neither call carries an
/// explicit deadline; both block only the review stage's payment action.
#[derive(Debug, Clone)]
pub struct PaymentClient {
  http: reqwest::Client,
  payments_url: String,
  verification_url: String,
}

impl PaymentClient {
  pub fn new(payments_url: impl Into<String>, verification_url: impl Into<String>) -> Self {
    Self {
      http: reqwest::Client::new(),
      payments_url: payments_url.into(),
      verification_url: verification_url.into(),
    }
  }

  pub fn from_config(config: &FlowConfig) -> Self {
    Self::new(config.payments_url.clone(), config.verification_url.clone())
  }

  /// Creates a payment session for one attempt.
  ///
  /// The body is read as text before parsing so an empty response and a
  /// non-JSON response fail as distinct conditions, each with its own
  /// user-facing message.
  #[instrument(name = "PaymentClient::create_session", skip_all, err(Display))]
  pub async fn create_session(&self, order: &OrderRequest) -> FlowResult<PaymentSession> {
    let response = self.http.post(&self.payments_url).json(order).send().await?;

    let status = response.status();
    event!(Level::DEBUG, %status, "Payments endpoint responded.");
    if !status.is_success() {
      return Err(FlowError::SessionRequest {
        status: status.as_u16(),
      });
    }

    let text = response.text().await?;
    if text.trim().is_empty() {
      return Err(FlowError::EmptySessionBody);
    }

    let body: Value =
      serde_json::from_str(&text).map_err(|source| FlowError::MalformedSessionBody { source })?;

    let session = PaymentSession::from_response(&body)?;
    event!(Level::INFO, order_id = %session.order_id, "Payment session created.");
    Ok(session)
  }

  /// Submits the widget's completion payload for verification.
  ///
  /// A non-success status, a missing/falsy confirmation flag, and a
  /// transport failure all collapse into [`FlowError::Verification`]: the
  /// charge state is unknown, so every one of them routes to the failure
  /// path and persists nothing.
  #[instrument(name = "PaymentClient::verify", skip_all, fields(order_id = %payload.razorpay_order_id), err(Display))]
  pub async fn verify(&self, payload: &GatewayPayload) -> FlowResult<()> {
    let body = json!({
      "razorpay_payment_id": payload.razorpay_payment_id,
      "razorpay_order_id": payload.razorpay_order_id,
      "razorpay_signature": payload.razorpay_signature,
      "order_id": payload.razorpay_order_id,
    });

    let response = self
      .http
      .post(&self.verification_url)
      .json(&body)
      .send()
      .await
      .map_err(|e| FlowError::Verification {
        detail: format!("verification request failed ({e})"),
      })?;

    let status = response.status();
    if !status.is_success() {
      return Err(FlowError::Verification {
        detail: format!("verification endpoint returned status {status}"),
      });
    }

    let result: Value = response.json().await.map_err(|e| FlowError::Verification {
      detail: format!("verification response was not JSON ({e})"),
    })?;

    let confirmed = truthy(result.get("verified")) || truthy(result.get("success"));
    if confirmed {
      event!(Level::INFO, "Gateway confirmed the payment.");
      Ok(())
    } else {
      event!(Level::WARN, body = %result, "Gateway did not confirm the payment.");
      Err(FlowError::Verification {
        detail: "the gateway did not confirm the payment".to_string(),
      })
    }
  }
}

/// JSON truthiness as the storefront applied it: false, 0, "", and null are
/// falsy; everything else confirms.
fn truthy(value: Option<&Value>) -> bool {
  match value {
    None | Some(Value::Null) => false,
    Some(Value::Bool(b)) => *b,
    Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
    Some(Value::String(s)) => !s.is_empty(),
    Some(Value::Array(_)) | Some(Value::Object(_)) => true,
  }
}
