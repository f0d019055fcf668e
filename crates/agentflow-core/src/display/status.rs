//! One-line feedback for mutations, in place of toast notifications.

use std::fmt;

use crate::error::AgentFlowError;

/// Outcome line printed after a command that changes state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }

    /// Failure status for `action` that surfaces validation reasons verbatim
    /// and summarizes everything else.
    pub fn from_error(action: &str, error: &AgentFlowError) -> Self {
        match error {
            AgentFlowError::InvalidInput { reason, .. } => Self::failure(reason.clone()),
            AgentFlowError::RepoNotFound { .. } | AgentFlowError::IssueNotFound { .. } => {
                Self::failure(error.to_string())
            }
            _ => Self::failure(format!("Failed to {action}")),
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}
