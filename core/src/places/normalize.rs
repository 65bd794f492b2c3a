// kundali/src/places/normalize.rs

use serde_json::Value;

/// A normalized place-name candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
  pub description: String,
}

impl Suggestion {
  pub fn new(description: impl Into<String>) -> Self {
    Self {
      description: description.into(),
    }
  }
}

/// Folds the provider's many response shapes into a flat suggestion list.
///
/// Container shapes are tried in order, first match wins:
/// 1. an array whose first element carries a `predictions` array,
/// 2. an object with a `predictions` array,
/// 3. a bare array of entries,
/// 4. an object with a `results` array,
/// 5. an object with a `places` array.
///
/// Anything unrecognized normalizes to an empty list; lookup failure is
/// never allowed to block free-text entry.
pub fn normalize_suggestions(body: &Value) -> Vec<Suggestion> {
  entries_of(body)
    .map(|entries| entries.iter().map(describe).collect())
    .unwrap_or_default()
}

fn entries_of(body: &Value) -> Option<&Vec<Value>> {
  if let Some(outer) = body.as_array() {
    if let Some(nested) = outer.first().and_then(|v| v.get("predictions")).and_then(Value::as_array) {
      return Some(nested);
    }
  }
  if let Some(predictions) = body.get("predictions").and_then(Value::as_array) {
    return Some(predictions);
  }
  if let Some(bare) = body.as_array() {
    return Some(bare);
  }
  if let Some(results) = body.get("results").and_then(Value::as_array) {
    return Some(results);
  }
  if let Some(places) = body.get("places").and_then(Value::as_array) {
    return Some(places);
  }
  None
}

fn describe(entry: &Value) -> Suggestion {
  if let Some(text) = entry.as_str() {
    return Suggestion::new(text);
  }
  for field in ["description", "name", "formatted_address"] {
    if let Some(text) = entry.get(field).and_then(Value::as_str) {
      return Suggestion::new(text);
    }
  }
  // Last resort: keep whatever the provider sent, stringified.
  Suggestion::new(entry.to_string())
}
