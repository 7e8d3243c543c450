//! Error types for assistant backends.

use std::fmt;

/// Errors from assistant backend operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantError {
    /// Backend is unavailable.
    Unavailable { backend: String, reason: String },
    /// Timeout waiting for a reply.
    Timeout,
}

impl fmt::Display for AssistantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { backend, reason } => {
                write!(f, "assistant backend '{backend}' unavailable: {reason}")
            }
            Self::Timeout => write!(f, "assistant reply timed out"),
        }
    }
}

impl std::error::Error for AssistantError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_display() {
        let err = AssistantError::Unavailable {
            backend: "canned".to_string(),
            reason: "not wired up".to_string(),
        };
        assert!(err.to_string().contains("canned"));
        assert!(err.to_string().contains("not wired up"));
    }

    #[test]
    fn timeout_display() {
        let err = AssistantError::Timeout;
        assert!(err.to_string().contains("timed out"));
    }
}
