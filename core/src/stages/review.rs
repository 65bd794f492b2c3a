// kundali/src/stages/review.rs

use crate::config::FlowConfig;
use crate::error::{FlowError, FlowResult};
use crate::flow::FlowEvent;
use crate::form::FormData;
use crate::payment::{OrderRequest, PaymentClient, PaymentWidget, WidgetConfig, WidgetOutcome};
use crate::store::CheckoutStore;
use std::sync::Arc;
use tracing::{event, instrument, Level};
use uuid::Uuid;

/// How one payment attempt ended, from the review stage's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentResolution {
  /// Verified and persisted; dispatch [`FlowEvent::PaymentSucceeded`].
  Succeeded,
  /// Verification rejected or unreachable; dispatch [`FlowEvent::PaymentFailed`].
  Failed,
  /// Widget dismissed without completing; stay on review, nothing changed.
  Abandoned,
}

impl PaymentResolution {
  /// The transition the caller should dispatch, if any.
  pub fn event(self) -> Option<FlowEvent> {
    match self {
      PaymentResolution::Succeeded => Some(FlowEvent::PaymentSucceeded),
      PaymentResolution::Failed => Some(FlowEvent::PaymentFailed),
      PaymentResolution::Abandoned => None,
    }
  }
}

/// The order-review stage: shows the persisted record, gates payment behind
/// an explicit consent toggle, and runs the session -> widget -> verify
/// sequence for one attempt at a time.
pub struct ReviewStage {
  store: CheckoutStore,
  client: Arc<PaymentClient>,
  widget: Arc<dyn PaymentWidget>,
  order_amount: u32,
  order_currency: String,
  widget_display_amount: u32,
  display_name: String,
  display_description: String,

  form: Option<FormData>,
  consent: bool,
  in_progress: bool,
  notice: Option<String>,
}

impl ReviewStage {
  /// Enters review, reading the persisted record. With nothing persisted
  /// the stage is a dead-end recovery view: payment stays disabled and only
  /// a return to the form is offered.
  pub fn enter(
    store: CheckoutStore,
    client: Arc<PaymentClient>,
    widget: Arc<dyn PaymentWidget>,
    config: &FlowConfig,
  ) -> Self {
    let form = store.form();
    if form.is_none() {
      event!(Level::WARN, "Review entered with no persisted order data.");
    }
    Self {
      store,
      client,
      widget,
      order_amount: config.order_amount,
      order_currency: config.order_currency.clone(),
      widget_display_amount: config.widget_display_amount,
      display_name: config.display_name.clone(),
      display_description: config.display_description.clone(),
      form,
      consent: false,
      in_progress: false,
      notice: None,
    }
  }

  /// The record under review, exactly as persisted.
  pub fn form(&self) -> Option<&FormData> {
    self.form.as_ref()
  }

  pub fn has_order_data(&self) -> bool {
    self.form.is_some()
  }

  pub fn consent(&self) -> bool {
    self.consent
  }

  pub fn set_consent(&mut self, consent: bool) {
    self.consent = consent;
  }

  pub fn in_progress(&self) -> bool {
    self.in_progress
  }

  /// The last user-facing message from a failed attempt, if any.
  pub fn notice(&self) -> Option<&str> {
    self.notice.as_deref()
  }

  /// Whether the payment action is enabled.
  pub fn can_pay(&self) -> bool {
    self.form.is_some() && self.consent && !self.in_progress
  }

  /// Runs one payment attempt end to end: order request, session creation,
  /// widget handoff, verification, persistence.
  ///
  /// Session-creation failures return `Err`; they reset the in-progress
  /// flag and leave the persisted record and consent untouched so the user
  /// can retry without re-entering anything. A resolved widget returns
  /// `Ok` with how the attempt ended.
  #[instrument(name = "ReviewStage::begin_payment", skip_all, fields(attempt_id = %Uuid::new_v4()), err(Display))]
  pub async fn begin_payment(&mut self) -> FlowResult<PaymentResolution> {
    let form = match &self.form {
      Some(form) => form.clone(),
      None => return Err(FlowError::MissingFormData),
    };
    if !self.consent {
      return Err(FlowError::ConsentRequired);
    }

    // Starting a new attempt invalidates any prior session implicitly; the
    // in-progress flag only debounces the action button.
    self.in_progress = true;
    self.notice = None;

    let order = OrderRequest::new(form.clone(), self.order_currency.clone(), self.order_amount);
    let session = match self.client.create_session(&order).await {
      Ok(session) => session,
      Err(e) => {
        self.in_progress = false;
        self.notice = Some(format!("Payment initialization failed: {e}"));
        return Err(e);
      }
    };

    let widget_config = WidgetConfig {
      key: session.gateway_key,
      amount: self.widget_display_amount,
      currency: self.order_currency.clone(),
      order_id: session.order_id,
      name: self.display_name.clone(),
      description: self.display_description.clone(),
      prefill_name: form.name.clone(),
      prefill_email: form.email.clone(),
    };

    match self.widget.open(widget_config).await {
      WidgetOutcome::Dismissed => {
        event!(Level::INFO, "Widget dismissed; attempt abandoned.");
        self.in_progress = false;
        Ok(PaymentResolution::Abandoned)
      }
      WidgetOutcome::Completed(payload) => match self.client.verify(&payload).await {
        Ok(()) => {
          let persisted = self.store.record_payment(&payload);
          self.in_progress = false;
          persisted?;
          Ok(PaymentResolution::Succeeded)
        }
        Err(e) => {
          event!(Level::WARN, error = %e, "Verification did not confirm the payment.");
          self.in_progress = false;
          self.notice = Some(e.to_string());
          Ok(PaymentResolution::Failed)
        }
      },
    }
  }
}
