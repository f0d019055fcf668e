//! Issue model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{IssueStatus, RiskLevel};

/// Name shown for an issue whose repository is no longer connected.
pub const UNKNOWN_REPO: &str = "Unknown";

/// A tracked GitHub issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Issue {
    /// Unique identifier for the issue row
    pub id: u64,

    /// Repository the issue was opened in
    pub repo_id: u64,

    /// Owner of the issue row
    pub user_id: String,

    /// GitHub issue number
    pub issue_number: u64,

    /// Issue title
    pub issue_title: String,

    /// Issue body, if any
    pub issue_body: Option<String>,

    /// Pipeline status
    pub status: IssueStatus,

    /// Risk assessed by the planner
    pub risk_level: Option<RiskLevel>,

    /// Timestamp when the issue was recorded (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the issue was last updated (UTC)
    pub updated_at: Timestamp,

    /// Joined repository name, [`UNKNOWN_REPO`] until resolved
    #[serde(default = "unknown_repo")]
    pub repo_name: String,
}

fn unknown_repo() -> String {
    UNKNOWN_REPO.to_string()
}
