// kundali/src/flow/mod.rs

//! The single-flow state machine selecting which stage is live and the
//! explicit transition table between stages.

pub mod controller;
pub mod stage;

pub use controller::{FlowController, FlowEvent};
pub use stage::Stage;
