// kundali/src/places/client.rs

use crate::config::FlowConfig;
use crate::error::{FlowError, FlowResult};
use crate::places::normalize::{normalize_suggestions, Suggestion};
use anyhow::anyhow;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{event, instrument, Level};

/// Queries shorter than this never reach the network.
pub const MIN_QUERY_LEN: usize = 3;

/// One-shot lookup against the places endpoint. Debouncing and cancellation
/// live in [`crate::places::Autocomplete`]; this type owns the transport
/// and the per-attempt deadline.
#[derive(Debug, Clone)]
pub struct PlacesClient {
  http: reqwest::Client,
  endpoint: String,
  timeout: Duration,
}

impl PlacesClient {
  pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
    Self {
      http: reqwest::Client::new(),
      endpoint: endpoint.into(),
      timeout,
    }
  }

  pub fn from_config(config: &FlowConfig) -> Self {
    Self::new(config.places_url.clone(), config.places_timeout)
  }

  /// Runs one lookup attempt. Short queries resolve to an empty list without
  /// touching the network. A deadline expiry cancels the in-flight request
  /// and reports [`FlowError::LookupTimeout`], distinct from the generic
  /// [`FlowError::Lookup`] failure.
  #[instrument(name = "PlacesClient::search", skip(self), fields(query_len = query.len()), err(Display))]
  pub async fn search(&self, query: &str) -> FlowResult<Vec<Suggestion>> {
    if query.trim().chars().count() < MIN_QUERY_LEN {
      return Ok(Vec::new());
    }

    let request = self
      .http
      .post(&self.endpoint)
      .json(&json!({ "query": query }))
      .send();

    let response = match tokio::time::timeout(self.timeout, request).await {
      Err(_elapsed) => {
        event!(Level::WARN, "Place lookup exceeded its deadline; request dropped.");
        return Err(FlowError::LookupTimeout);
      }
      Ok(Err(e)) => return Err(FlowError::Lookup { source: e.into() }),
      Ok(Ok(response)) => response,
    };

    let status = response.status();
    if !status.is_success() {
      return Err(FlowError::Lookup {
        source: anyhow!("server responded with status {status}"),
      });
    }

    let body: Value = response
      .json()
      .await
      .map_err(|e| FlowError::Lookup { source: e.into() })?;

    let suggestions = normalize_suggestions(&body);
    event!(Level::DEBUG, count = suggestions.len(), "Place lookup succeeded.");
    Ok(suggestions)
  }
}
