// kundali/src/form/mod.rs

//! The user/birth-detail record driving an order, its draft form, and the
//! synchronous validation that gates persistence.

pub mod data;
pub mod validate;

pub use data::{ChartStyle, FormData, FormDraft, Gender, Language};
pub use validate::{validate, Field, FieldErrors};
