// kundali/src/stages/form.rs

use crate::error::{FlowError, FlowResult};
use crate::form::{validate, ChartStyle, Field, FieldErrors, FormData, FormDraft, Gender, Language};
use crate::store::CheckoutStore;
use chrono::{NaiveDate, NaiveTime};
use std::time::Duration;
use tracing::{event, instrument, Level};

/// The data-collection stage: a local draft, its per-field errors, and the
/// submit path that persists and hands control to review.
pub struct FormCapture {
  store: CheckoutStore,
  draft: FormDraft,
  errors: FieldErrors,
  /// Pause between successful validation and the transition; zero disables.
  submit_delay: Duration,
}

impl FormCapture {
  /// Creates the stage, pre-populating the draft from any persisted record.
  pub fn enter(store: CheckoutStore, submit_delay: Duration) -> Self {
    let draft = match store.form() {
      Some(saved) => {
        event!(Level::DEBUG, "Draft pre-populated from the persisted record.");
        FormDraft::from(saved)
      }
      None => FormDraft::default(),
    };
    Self {
      store,
      draft,
      errors: FieldErrors::new(),
      submit_delay,
    }
  }

  pub fn draft(&self) -> &FormDraft {
    &self.draft
  }

  pub fn errors(&self) -> &FieldErrors {
    &self.errors
  }

  // Editing a field clears only that field's error; other fields keep
  // theirs until the next submit.

  pub fn set_name(&mut self, value: impl Into<String>) {
    self.draft.name = value.into();
    self.errors.clear(Field::Name);
  }

  pub fn set_email(&mut self, value: impl Into<String>) {
    self.draft.email = value.into();
    self.errors.clear(Field::Email);
  }

  pub fn set_gender(&mut self, value: Gender) {
    self.draft.gender = Some(value);
    self.errors.clear(Field::Gender);
  }

  pub fn set_birth_date(&mut self, value: NaiveDate) {
    self.draft.birth_date = Some(value);
    self.errors.clear(Field::BirthDate);
  }

  pub fn set_birth_time(&mut self, value: NaiveTime) {
    self.draft.birth_time = Some(value);
    self.errors.clear(Field::BirthTime);
  }

  pub fn set_birth_place(&mut self, value: impl Into<String>) {
    self.draft.birth_place = value.into();
    self.errors.clear(Field::BirthPlace);
  }

  pub fn set_language(&mut self, value: Language) {
    self.draft.language = value;
  }

  pub fn set_chart_style(&mut self, value: ChartStyle) {
    self.draft.chart_style = value;
  }

  /// Validates and persists the draft. On success the caller dispatches
  /// [`crate::flow::FlowEvent::Next`]; on failure the field errors are
  /// surfaced, nothing is persisted, and the stage stays live.
  #[instrument(name = "FormCapture::submit", skip_all, err(Display))]
  pub async fn submit(&mut self) -> FlowResult<FormData> {
    let form = match validate(&self.draft) {
      Ok(form) => form,
      Err(errors) => {
        event!(Level::INFO, invalid_fields = errors.len(), "Submission blocked by validation.");
        self.errors = errors.clone();
        return Err(FlowError::Validation { errors });
      }
    };

    self.errors = FieldErrors::new();
    self.store.save_form(&form)?;

    if !self.submit_delay.is_zero() {
      // UX throttle so validation success does not snap straight to review.
      tokio::time::sleep(self.submit_delay).await;
    }

    event!(Level::INFO, "Form captured and persisted.");
    Ok(form)
  }
}
