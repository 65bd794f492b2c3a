// src/lib.rs

//! Kundali: the client-side checkout flow for an astrology-reading
//! storefront, reimplemented as an embeddable library.
//!
//! The flow is a four-stage wizard:
//!  - Form capture with synchronous per-field validation and local
//!    persistence of the completed record.
//!  - Order review, gated by an explicit consent toggle, which creates a
//!    payment session and hands off to an injected gateway widget.
//!  - Asynchronous verification of the widget's completion payload,
//!    resolving to a success or failure stage (both re-enterable).
//!  - A debounced, cancellable place autocomplete feeding the birth-place
//!    field, tolerant of every response shape the provider emits.
//!
//! External collaborators (the key-value store standing in for browser
//! storage, and the payment widget) are injected traits, so the whole flow
//! runs against in-memory fakes in tests.

pub mod config;
pub mod error;
pub mod flow;
pub mod form;
pub mod payment;
pub mod places;
pub mod shared;
pub mod stages;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::config::FlowConfig;
pub use crate::error::{FlowError, FlowResult};

pub use crate::flow::{FlowController, FlowEvent, Stage};

pub use crate::form::{ChartStyle, Field, FieldErrors, FormData, FormDraft, Gender, Language};

pub use crate::payment::{
  GatewayPayload, OrderRequest, PaymentClient, PaymentSession, PaymentWidget, WidgetConfig,
  WidgetOutcome,
};

pub use crate::places::{Autocomplete, AutocompleteState, PlacesClient, Suggestion};

pub use crate::shared::Shared;

pub use crate::stages::{FailureStage, FormCapture, PaymentResolution, ReviewStage, SuccessStage};

pub use crate::store::{CheckoutStore, KeyValueStore, MemoryStore, PaymentOutcome};
