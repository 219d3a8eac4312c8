//! Activation state machine.

use serde::Serialize;

use crate::domains::tools::ToolError;

/// Message shown when a load fails without saying why.
pub const LOAD_FAILED_FALLBACK: &str = "Failed to load tool";

/// Load progress of one activation.
///
/// Starts `Pending`; moves once to `Ready` or `Failed` and stays there.
/// Retrying means activating again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ActivationState {
    Pending,
    Ready,
    Failed { message: String },
}

impl ActivationState {
    /// A failed state, substituting a generic message for a blank one.
    pub fn failed(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            LOAD_FAILED_FALLBACK.to_string()
        } else {
            message
        };
        Self::Failed { message }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

impl From<&ToolError> for ActivationState {
    fn from(err: &ToolError) -> Self {
        match err {
            ToolError::LoadFailed(message) => Self::failed(message.as_str()),
            other => Self::failed(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!ActivationState::Pending.is_terminal());
        assert!(ActivationState::Ready.is_terminal());
        assert!(ActivationState::failed("boom").is_terminal());
    }

    #[test]
    fn test_blank_failure_uses_fallback() {
        assert_eq!(
            ActivationState::failed("  "),
            ActivationState::Failed {
                message: LOAD_FAILED_FALLBACK.to_string()
            }
        );
        assert_eq!(
            ActivationState::from(&ToolError::load_failed("")),
            ActivationState::failed(LOAD_FAILED_FALLBACK)
        );
    }

    #[test]
    fn test_load_failure_keeps_message() {
        let state = ActivationState::from(&ToolError::load_failed("chunk missing"));
        assert_eq!(
            state,
            ActivationState::Failed {
                message: "chunk missing".to_string()
            }
        );
    }

    #[test]
    fn test_serialized_shape() {
        assert_eq!(
            serde_json::to_value(ActivationState::failed("x")).unwrap(),
            serde_json::json!({ "status": "failed", "message": "x" })
        );
        assert_eq!(
            serde_json::to_value(ActivationState::Pending).unwrap(),
            serde_json::json!({ "status": "pending" })
        );
    }
}
