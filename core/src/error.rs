// kundali/src/error.rs
use crate::form::FieldErrors;
use anyhow::Error as AnyhowError;
use thiserror::Error;

/// Error taxonomy for the checkout flow.
///
/// Every variant's `Display` text is the user-facing message for that
/// failure; components catch these at the boundary that issued the call and
/// surface them as inline state rather than letting them escape to a global
/// handler. Nothing here is retried automatically.
#[derive(Debug, Error)]
pub enum FlowError {
  /// One or more form fields failed validation. Blocks persistence and the
  /// Form -> Review transition; the per-field messages live in `errors`.
  #[error("Please correct the highlighted fields.")]
  Validation { errors: FieldErrors },

  /// The place-lookup request failed or returned a malformed body.
  /// Recoverable: the field stays usable for free-text entry.
  #[error("Unable to load suggestions. You can still type manually.")]
  Lookup {
    #[source]
    source: AnyhowError,
  },

  /// The place-lookup request exceeded its per-attempt deadline.
  #[error("Request timed out. Please try again.")]
  LookupTimeout,

  /// The payment-session endpoint answered with a non-success status.
  #[error("Payment initialization failed with status {status}")]
  SessionRequest { status: u16 },

  /// The payment-session endpoint answered 2xx with an empty body.
  #[error("Payments endpoint returned empty response")]
  EmptySessionBody,

  /// The payment-session endpoint answered 2xx with a body that is not JSON.
  #[error("Payments endpoint returned invalid JSON")]
  MalformedSessionBody {
    #[source]
    source: serde_json::Error,
  },

  /// The session body parsed but carried no recognizable session id.
  #[error("No order ID received from payments endpoint")]
  MissingOrderId,

  /// The session body parsed but carried no recognizable gateway key.
  #[error("No gateway key received from payments endpoint")]
  MissingGatewayKey,

  /// Review was entered with nothing persisted; only a return to the form
  /// can recover this.
  #[error("No saved order data found. Please return to the form and start over.")]
  MissingFormData,

  /// Payment was requested before the consent toggle was set.
  #[error("Consent is required before payment can begin.")]
  ConsentRequired,

  /// Negative, ambiguous, or unreachable verification result. The user may
  /// already have been charged, hence the support instruction.
  #[error("Payment verification failed: {detail}. Please contact support if amount was debited.")]
  Verification { detail: String },

  /// Transport-level failure talking to the payment endpoints.
  #[error("Network error: {source}")]
  Transport {
    #[from]
    source: reqwest::Error,
  },

  /// A value could not be encoded for the persistence store.
  #[error("Failed to encode data for local storage: {source}")]
  Encode {
    #[source]
    source: serde_json::Error,
  },

  #[error("Configuration error: {0}")]
  Config(String),
}

pub type FlowResult<T, E = FlowError> = std::result::Result<T, E>;
