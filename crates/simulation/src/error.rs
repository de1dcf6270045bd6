// ---------------------------------------------------------------------------
// PickupError: recoverable failures in the pickup lifecycle
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors surfaced by spawning and configuration.
///
/// None of these are fatal: callers log them and carry on, the worst outcome
/// being that no pickup appears this cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum PickupError {
    /// No `PickupPrefab` has been registered, so there is nothing to instantiate.
    MissingPrefab,
    /// A configuration field is outside the range the lifecycle supports.
    InvalidConfig { field: &'static str, reason: String },
}

impl PickupError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        PickupError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PickupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickupError::MissingPrefab => write!(f, "pickup prefab is not registered"),
            PickupError::InvalidConfig { field, reason } => {
                write!(f, "invalid pickup config: {field} {reason}")
            }
        }
    }
}

impl std::error::Error for PickupError {}
