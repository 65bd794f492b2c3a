// kundali/examples/scripted_checkout.rs
//
// Walks the whole wizard against mocked endpoints: capture a form, review
// it, consent, pay through a stub widget, verify, and print the receipt.

use async_trait::async_trait;
use kundali::{
  CheckoutStore, FlowConfig, FlowController, FlowEvent, FormCapture, GatewayPayload, PaymentClient,
  PaymentWidget, ReviewStage, SuccessStage, WidgetConfig, WidgetOutcome,
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Completes instantly with a canned gateway payload.
struct InstantWidget;

#[async_trait]
impl PaymentWidget for InstantWidget {
  async fn open(&self, config: WidgetConfig) -> WidgetOutcome {
    info!(order_id = %config.order_id, "Widget opened; completing immediately.");
    WidgetOutcome::Completed(GatewayPayload {
      razorpay_payment_id: "pay_demo".to_string(),
      razorpay_order_id: config.order_id,
      razorpay_signature: "sig_demo".to_string(),
    })
  }
}

#[tokio::main]
async fn main() -> Result<(), kundali::FlowError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  // Stand-in backend.
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/api/astrology-payments"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "order_id": "order_demo", "razorpay_key": "rzp_demo_key"
    })))
    .mount(&server)
    .await;
  Mock::given(method("POST"))
    .and(path("/api/payment-verification"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "verified": true })))
    .mount(&server)
    .await;

  let mut config = FlowConfig::default();
  config.payments_url = format!("{}/api/astrology-payments", server.uri());
  config.verification_url = format!("{}/api/payment-verification", server.uri());
  config.submit_delay = std::time::Duration::ZERO;

  let store = CheckoutStore::in_memory();
  let mut controller = FlowController::new();

  // Stage 1: the form.
  let mut capture = FormCapture::enter(store.clone(), config.submit_delay);
  capture.set_name("Asha Rao");
  capture.set_email("asha@example.com");
  capture.set_gender(kundali::Gender::Female);
  capture.set_birth_date(chrono::NaiveDate::from_ymd_opt(1993, 4, 12).expect("valid date"));
  capture.set_birth_time(chrono::NaiveTime::from_hms_opt(6, 45, 0).expect("valid time"));
  capture.set_birth_place("Mysuru, Karnataka, India");
  capture.submit().await?;
  controller.dispatch(FlowEvent::Next);

  // Stage 2: review and pay.
  let client = Arc::new(PaymentClient::from_config(&config));
  let mut review = ReviewStage::enter(store.clone(), client, Arc::new(InstantWidget), &config);
  info!(name = %review.form().expect("just submitted").name, "Reviewing order.");
  review.set_consent(true);
  let resolution = review.begin_payment().await?;
  if let Some(event) = resolution.event() {
    controller.dispatch(event);
  }

  // Stage 3: the receipt.
  let success = SuccessStage::enter(store, &config);
  let today = chrono::Local::now().date_naive();
  println!("{}", success.receipt(today));

  info!(stage = %controller.stage(), "Flow finished.");
  Ok(())
}
