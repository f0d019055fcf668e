//! Pull request model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::PrStatus;

/// A pull request produced for an issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PullRequest {
    /// Unique identifier for the pull request row
    pub id: u64,

    /// Issue the pull request resolves
    pub issue_id: u64,

    /// GitHub pull request number, once opened
    pub pr_number: Option<u64>,

    /// GitHub URL, once opened
    pub pr_url: Option<String>,

    /// Review status
    pub status: PrStatus,

    /// Number of files touched
    pub files_changed: Option<u32>,

    /// Timestamp when the pull request was recorded (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the pull request was last updated (UTC)
    pub updated_at: Timestamp,
}
