// kundali/src/form/validate.rs

use crate::form::data::{FormData, FormDraft};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use tracing::{event, Level};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
  // Same shape the storefront enforces: one '@', a dot in the domain,
  // no whitespace anywhere.
  Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Keys of the per-field error map, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
  Name,
  Email,
  Gender,
  BirthDate,
  BirthTime,
  BirthPlace,
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      Field::Name => "name",
      Field::Email => "email",
      Field::Gender => "gender",
      Field::BirthDate => "birthDate",
      Field::BirthTime => "birthTime",
      Field::BirthPlace => "birthPlace",
    };
    f.write_str(name)
  }
}

/// Field-level validation messages, keyed by the offending field. Empty
/// means the draft is submittable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn message(&self, field: Field) -> Option<&str> {
    self.0.get(&field).map(String::as_str)
  }

  pub fn contains(&self, field: Field) -> bool {
    self.0.contains_key(&field)
  }

  pub fn insert(&mut self, field: Field, message: impl Into<String>) {
    self.0.insert(field, message.into());
  }

  /// Editing a field clears only that field's error; the rest are left for
  /// the next submit to re-evaluate.
  pub fn clear(&mut self, field: Field) {
    self.0.remove(&field);
  }

  pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
    self.0.keys().copied()
  }

  pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
    self.0.iter().map(|(f, m)| (*f, m.as_str()))
  }
}

/// Synchronous whole-draft validation. Returns the completed record, or the
/// exact set of missing/invalid fields with their inline messages.
pub fn validate(draft: &FormDraft) -> Result<FormData, FieldErrors> {
  let mut errors = FieldErrors::new();

  if draft.name.trim().is_empty() {
    errors.insert(Field::Name, "Name is required");
  }
  let email = draft.email.trim();
  if email.is_empty() {
    errors.insert(Field::Email, "Email is required");
  } else if !EMAIL_RE.is_match(email) {
    errors.insert(Field::Email, "Please enter a valid email");
  }
  if draft.gender.is_none() {
    errors.insert(Field::Gender, "Gender is required");
  }
  if draft.birth_date.is_none() {
    errors.insert(Field::BirthDate, "Birth date is required");
  }
  if draft.birth_time.is_none() {
    errors.insert(Field::BirthTime, "Birth time is required");
  }
  if draft.birth_place.trim().is_empty() {
    errors.insert(Field::BirthPlace, "Birth place is required");
  }

  if !errors.is_empty() {
    event!(Level::DEBUG, invalid_fields = errors.len(), "Draft failed validation.");
    return Err(errors);
  }

  Ok(FormData {
    name: draft.name.trim().to_string(),
    email: email.to_string(),
    gender: draft.gender.expect("checked by validation"),
    birth_date: draft.birth_date.expect("checked by validation"),
    birth_time: draft.birth_time.expect("checked by validation"),
    birth_place: draft.birth_place.trim().to_string(),
    language: draft.language,
    chart_style: draft.chart_style,
  })
}
