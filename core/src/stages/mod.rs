// kundali/src/stages/mod.rs

//! The per-stage components: each owns its local state, talks to the store
//! and the external collaborators, and reports which [`crate::flow::FlowEvent`]
//! the caller should dispatch next.

pub mod form;
pub mod review;
pub mod terminal;

pub use form::FormCapture;
pub use review::{PaymentResolution, ReviewStage};
pub use terminal::{FailureStage, SuccessStage};
