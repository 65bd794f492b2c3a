// kundali/src/config.rs

use crate::error::{FlowError, FlowResult};
use dotenvy::dotenv;
use std::env;
use std::time::Duration;

/// Runtime knobs for the checkout flow: endpoint locations, the fixed order
/// price, and the UX timers. Everything has a default so the flow can run
/// against a local stub with no environment at all.
#[derive(Debug, Clone)]
pub struct FlowConfig {
  pub places_url: String,
  pub payments_url: String,
  pub verification_url: String,

  /// Quiet period between keystrokes before a place lookup fires.
  pub places_debounce: Duration,
  /// Per-attempt deadline for one place lookup.
  pub places_timeout: Duration,
  /// Pause between successful validation and the Review transition.
  /// Zero disables it; it is a UX throttle, not a correctness requirement.
  pub submit_delay: Duration,

  /// Order amount sent to the session endpoint, in whole currency units.
  pub order_amount: u32,
  pub order_currency: String,
  /// Amount shown by the gateway widget, in minor units (paise).
  pub widget_display_amount: u32,

  pub display_name: String,
  pub display_description: String,
}

impl Default for FlowConfig {
  fn default() -> Self {
    let base = "http://127.0.0.1:8788";
    Self {
      places_url: format!("{base}/api/places-autocomplete"),
      payments_url: format!("{base}/api/astrology-payments"),
      verification_url: format!("{base}/api/payment-verification"),
      places_debounce: Duration::from_millis(300),
      places_timeout: Duration::from_secs(10),
      submit_delay: Duration::from_millis(500),
      order_amount: 500,
      order_currency: "INR".to_string(),
      widget_display_amount: 50_000,
      display_name: "Cosmic Astrology Portal".to_string(),
      display_description: "Personalized Cosmic Reading".to_string(),
    }
  }
}

impl FlowConfig {
  pub fn from_env() -> FlowResult<Self> {
    dotenv().ok(); // Load .env file if present

    let defaults = Self::default();

    let base_url = env::var("CHECKOUT_API_BASE_URL").ok();
    let endpoint = |var: &str, path: &str, fallback: &str| match env::var(var) {
      Ok(url) => url,
      Err(_) => match &base_url {
        Some(base) => format!("{}{}", base.trim_end_matches('/'), path),
        None => fallback.to_string(),
      },
    };

    let millis = |var: &str, fallback: Duration| -> FlowResult<Duration> {
      match env::var(var) {
        Ok(raw) => raw
          .parse::<u64>()
          .map(Duration::from_millis)
          .map_err(|e| FlowError::Config(format!("Invalid {var}: {e}"))),
        Err(_) => Ok(fallback),
      }
    };

    let amount = |var: &str, fallback: u32| -> FlowResult<u32> {
      match env::var(var) {
        Ok(raw) => raw
          .parse::<u32>()
          .map_err(|e| FlowError::Config(format!("Invalid {var}: {e}"))),
        Err(_) => Ok(fallback),
      }
    };

    let places_timeout = match env::var("PLACES_TIMEOUT_SECS") {
      Ok(raw) => raw
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|e| FlowError::Config(format!("Invalid PLACES_TIMEOUT_SECS: {e}")))?,
      Err(_) => defaults.places_timeout,
    };

    let config = Self {
      places_url: endpoint(
        "PLACES_AUTOCOMPLETE_URL",
        "/api/places-autocomplete",
        &defaults.places_url,
      ),
      payments_url: endpoint("PAYMENTS_URL", "/api/astrology-payments", &defaults.payments_url),
      verification_url: endpoint(
        "PAYMENT_VERIFICATION_URL",
        "/api/payment-verification",
        &defaults.verification_url,
      ),
      places_debounce: millis("PLACES_DEBOUNCE_MS", defaults.places_debounce)?,
      places_timeout,
      submit_delay: millis("SUBMIT_DELAY_MS", defaults.submit_delay)?,
      order_amount: amount("ORDER_AMOUNT", defaults.order_amount)?,
      order_currency: env::var("ORDER_CURRENCY").unwrap_or(defaults.order_currency),
      widget_display_amount: amount("WIDGET_DISPLAY_AMOUNT", defaults.widget_display_amount)?,
      display_name: defaults.display_name,
      display_description: defaults.display_description,
    };

    tracing::info!("Checkout flow configuration loaded.");
    Ok(config)
  }
}
