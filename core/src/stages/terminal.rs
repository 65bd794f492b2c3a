// kundali/src/stages/terminal.rs

use crate::config::FlowConfig;
use crate::store::{CheckoutStore, PaymentOutcome};
use chrono::NaiveDate;
use tracing::{event, Level};

/// The post-payment confirmation stage: reads the persisted outcome, renders
/// a plain-text receipt, and clears everything when a new order starts.
pub struct SuccessStage {
  store: CheckoutStore,
  portal_name: String,
  service: String,
  amount: u32,
}

impl SuccessStage {
  pub fn enter(store: CheckoutStore, config: &FlowConfig) -> Self {
    Self {
      store,
      portal_name: config.display_name.clone(),
      service: config.display_description.clone(),
      amount: config.order_amount,
    }
  }

  /// The verified outcome backing this stage, if the flag is set.
  pub fn outcome(&self) -> Option<PaymentOutcome> {
    self.store.payment_outcome()
  }

  /// Plain-text receipt for the given order date.
  pub fn receipt(&self, order_date: NaiveDate) -> String {
    format!(
      "{portal}\n\
       ================================\n\
       Order Date: {date}\n\
       Service: {service}\n\
       Amount: \u{20b9}{amount}\n\
       Status: Payment confirmed\n\
       \n\
       Thank you for your order! Your reading will arrive by email\n\
       within 2 hours.\n",
      portal = self.portal_name,
      date = order_date.format("%Y-%m-%d"),
      service = self.service,
      amount = self.amount,
    )
  }

  /// Clears the form record, success flag, and payment details together;
  /// the caller then dispatches [`crate::flow::FlowEvent::NewOrder`].
  pub fn start_new_order(&self) {
    self.store.clear_order();
    event!(Level::INFO, "New order started from the success stage.");
  }
}

/// The verification-failure stage. The captured form record and consent are
/// left intact so a retry can go straight back to review.
pub struct FailureStage {
  store: CheckoutStore,
}

impl FailureStage {
  pub fn enter(store: CheckoutStore) -> Self {
    Self { store }
  }

  /// What the user should know: the charge state is ambiguous.
  pub fn support_notice(&self) -> &'static str {
    "Payment verification failed. Your account may or may not have been \
     charged; please contact support before paying again if you saw a debit."
  }

  /// Clears all order keys; the caller dispatches
  /// [`crate::flow::FlowEvent::NewOrder`].
  pub fn start_new_order(&self) {
    self.store.clear_order();
    event!(Level::INFO, "New order started from the failure stage.");
  }
}
