// kundali/src/payment/mod.rs

//! Payment-gateway orchestration: session creation against the payments
//! endpoint, the injected widget seam, and asynchronous verification of the
//! widget's completion payload.

pub mod client;
pub mod session;
pub mod widget;

pub use client::PaymentClient;
pub use session::{OrderRequest, PaymentSession};
pub use widget::{GatewayPayload, PaymentWidget, WidgetConfig, WidgetOutcome};
