// kundali/src/form/data.rs

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
  Male,
  Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
  #[default]
  English,
  Hindi,
}

// Serialized with the storefront's literal labels so the stored draft and
// the order request keep the wire format the backend already accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ChartStyle {
  #[default]
  #[serde(rename = "North Indian")]
  NorthIndian,
  #[serde(rename = "South Indian")]
  SouthIndian,
}

/// A fully validated order record. Only `validate` produces one; it is
/// persisted verbatim, consumed read-only by the review stage, and replaced
/// wholesale by the next successful submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
  pub name: String,
  pub email: String,
  pub gender: Gender,
  pub birth_date: NaiveDate,
  pub birth_time: NaiveTime,
  pub birth_place: String,
  pub language: Language,
  pub chart_style: ChartStyle,
}

/// The in-progress form state: free text plus not-yet-chosen selections.
/// Language and chart style carry defaults and are never validated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDraft {
  pub name: String,
  pub email: String,
  pub gender: Option<Gender>,
  pub birth_date: Option<NaiveDate>,
  pub birth_time: Option<NaiveTime>,
  pub birth_place: String,
  pub language: Language,
  pub chart_style: ChartStyle,
}

impl From<FormData> for FormDraft {
  fn from(data: FormData) -> Self {
    Self {
      name: data.name,
      email: data.email,
      gender: Some(data.gender),
      birth_date: Some(data.birth_date),
      birth_time: Some(data.birth_time),
      birth_place: data.birth_place,
      language: data.language,
      chart_style: data.chart_style,
    }
  }
}
