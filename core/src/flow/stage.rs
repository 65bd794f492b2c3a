// kundali/src/flow/stage.rs

use std::fmt;

/// The four stages of the wizard. `Form` is initial; the terminal stages are
/// both re-enterable through new-order/retry, so no stage is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
  #[default]
  Form,
  Review,
  Success,
  Failure,
}

impl Stage {
  /// Parses a stored/serialized stage name. Anything unrecognized falls
  /// back to `Form` rather than stranding the flow.
  pub fn parse(name: &str) -> Self {
    match name {
      "review" => Stage::Review,
      "success" => Stage::Success,
      "failure" => Stage::Failure,
      "form" => Stage::Form,
      other => {
        tracing::warn!(stage = other, "Unknown stage name; falling back to the form.");
        Stage::Form
      }
    }
  }

  pub fn name(&self) -> &'static str {
    match self {
      Stage::Form => "form",
      Stage::Review => "review",
      Stage::Success => "success",
      Stage::Failure => "failure",
    }
  }
}

impl fmt::Display for Stage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}
