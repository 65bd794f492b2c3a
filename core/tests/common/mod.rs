// tests/common/mod.rs
#![allow(dead_code)] // Allow unused helpers in this common test module

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use kundali::{
  ChartStyle, CheckoutStore, FlowConfig, FormData, FormDraft, Gender, GatewayPayload, Language,
  PaymentWidget, WidgetConfig, WidgetOutcome,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tracing::Level;

// --- Tracing Setup ---
use once_cell::sync::Lazy;
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Fixtures ---

pub fn sample_draft() -> FormDraft {
  FormDraft {
    name: "Asha Rao".to_string(),
    email: "asha@example.com".to_string(),
    gender: Some(Gender::Female),
    birth_date: NaiveDate::from_ymd_opt(1993, 4, 12),
    birth_time: NaiveTime::from_hms_opt(6, 45, 0),
    birth_place: "Mysuru, Karnataka, India".to_string(),
    language: Language::English,
    chart_style: ChartStyle::NorthIndian,
  }
}

pub fn sample_form() -> FormData {
  kundali::form::validate(&sample_draft()).expect("sample draft is valid")
}

pub fn sample_payload() -> GatewayPayload {
  GatewayPayload {
    razorpay_payment_id: "pay_test_001".to_string(),
    razorpay_order_id: "order_test_001".to_string(),
    razorpay_signature: "sig_test_001".to_string(),
  }
}

pub fn memory_store() -> CheckoutStore {
  CheckoutStore::in_memory()
}

/// A FlowConfig aimed at a test server, with the UX throttle disabled and
/// short timers so tests stay fast.
pub fn test_config(base_url: &str) -> FlowConfig {
  let mut config = FlowConfig::default();
  config.places_url = format!("{base_url}/api/places-autocomplete");
  config.payments_url = format!("{base_url}/api/astrology-payments");
  config.verification_url = format!("{base_url}/api/payment-verification");
  config.places_debounce = Duration::from_millis(50);
  config.places_timeout = Duration::from_millis(500);
  config.submit_delay = Duration::ZERO;
  config
}

// --- Widget Stub ---

/// What the stub widget should do when opened.
#[derive(Debug, Clone)]
pub enum StubBehavior {
  Complete(GatewayPayload),
  Dismiss,
}

/// Records every open and resolves with a fixed behavior, standing in for
/// the gateway embed.
pub struct StubWidget {
  behavior: StubBehavior,
  opens: AtomicUsize,
  last_config: Mutex<Option<WidgetConfig>>,
}

impl StubWidget {
  pub fn completing(payload: GatewayPayload) -> Self {
    Self::with_behavior(StubBehavior::Complete(payload))
  }

  pub fn dismissing() -> Self {
    Self::with_behavior(StubBehavior::Dismiss)
  }

  pub fn with_behavior(behavior: StubBehavior) -> Self {
    Self {
      behavior,
      opens: AtomicUsize::new(0),
      last_config: Mutex::new(None),
    }
  }

  pub fn open_count(&self) -> usize {
    self.opens.load(Ordering::SeqCst)
  }

  pub fn last_config(&self) -> Option<WidgetConfig> {
    self.last_config.lock().unwrap().clone()
  }
}

#[async_trait]
impl PaymentWidget for StubWidget {
  async fn open(&self, config: WidgetConfig) -> WidgetOutcome {
    self.opens.fetch_add(1, Ordering::SeqCst);
    *self.last_config.lock().unwrap() = Some(config);
    match &self.behavior {
      StubBehavior::Complete(payload) => WidgetOutcome::Completed(payload.clone()),
      StubBehavior::Dismiss => WidgetOutcome::Dismissed,
    }
  }
}
