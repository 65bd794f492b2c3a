// kundali/src/places/autocomplete.rs

use crate::places::client::{PlacesClient, MIN_QUERY_LEN};
use crate::places::normalize::Suggestion;
use crate::shared::Shared;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{event, Level};

/// Observable state of the autocomplete field. The owning component reads
/// it; the background lookup task writes it.
#[derive(Debug, Clone, Default)]
pub struct AutocompleteState {
  /// The bound free-text value. Always usable, whatever the API does.
  pub value: String,
  pub suggestions: Vec<Suggestion>,
  pub panel_open: bool,
  pub loading: bool,
  /// Recoverable lookup error message, if the last attempt failed.
  pub error: Option<String>,
}

/// Debounced, cancellable suggestion feed for one input field.
///
/// Each keystroke schedules a lookup after a quiet period; scheduling a new
/// one aborts whatever was pending or in flight, so only the most recent
/// query ever completes (debounce, not throttle). Dropping the feed aborts
/// any outstanding work.
pub struct Autocomplete {
  client: Arc<PlacesClient>,
  debounce: Duration,
  state: Shared<AutocompleteState>,
  pending: Option<JoinHandle<()>>,
}

impl Autocomplete {
  pub fn new(client: Arc<PlacesClient>, debounce: Duration) -> Self {
    Self {
      client,
      debounce,
      state: Shared::default(),
      pending: None,
    }
  }

  /// Handle to the observable state, for rendering and assertions.
  pub fn state(&self) -> Shared<AutocompleteState> {
    self.state.clone()
  }

  pub fn value(&self) -> String {
    self.state.read().value.clone()
  }

  /// A keystroke: rebinds the value, opens the panel, and either clears
  /// everything (short query) or schedules a lookup after the quiet period.
  pub fn input(&mut self, value: &str) {
    self.cancel_pending();

    let short = value.trim().chars().count() < MIN_QUERY_LEN;
    {
      let mut state = self.state.write();
      state.value = value.to_string();
      state.panel_open = true;
      if short {
        state.suggestions.clear();
        state.error = None;
        state.loading = false;
      }
    }
    if short {
      return;
    }

    let client = Arc::clone(&self.client);
    let state = self.state.clone();
    let debounce = self.debounce;
    let query = value.to_string();

    self.pending = Some(tokio::spawn(async move {
      tokio::time::sleep(debounce).await;

      {
        let mut guard = state.write();
        guard.loading = true;
        guard.error = None;
      }

      match client.search(&query).await {
        Ok(suggestions) => {
          let mut guard = state.write();
          guard.suggestions = suggestions;
          guard.loading = false;
        }
        Err(e) => {
          event!(Level::WARN, error = %e, "Place lookup failed; field stays free-text.");
          let mut guard = state.write();
          guard.suggestions.clear();
          guard.error = Some(e.to_string());
          guard.loading = false;
        }
      }
    }));
  }

  /// Accepts a suggestion: overwrites the bound value, closes the panel,
  /// and clears any pending error or scheduled lookup. Returns the chosen
  /// description, or `None` for an out-of-range index.
  pub fn select(&mut self, index: usize) -> Option<String> {
    self.cancel_pending();
    let mut state = self.state.write();
    let chosen = state.suggestions.get(index)?.description.clone();
    state.value = chosen.clone();
    state.suggestions.clear();
    state.panel_open = false;
    state.error = None;
    Some(chosen)
  }

  /// An interaction outside both the input and the panel.
  pub fn close_panel(&mut self) {
    self.state.write().panel_open = false;
  }

  fn cancel_pending(&mut self) {
    if let Some(handle) = self.pending.take() {
      handle.abort();
    }
  }
}

impl Drop for Autocomplete {
  fn drop(&mut self) {
    self.cancel_pending();
  }
}
