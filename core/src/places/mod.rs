// kundali/src/places/mod.rs

//! Place-name lookup against an external autocomplete endpoint: response
//! normalization, the HTTP client with its per-attempt deadline, and the
//! debounced, cancellable feed a form field binds to.

pub mod autocomplete;
pub mod client;
pub mod normalize;

pub use autocomplete::{Autocomplete, AutocompleteState};
pub use client::{PlacesClient, MIN_QUERY_LEN};
pub use normalize::{normalize_suggestions, Suggestion};
