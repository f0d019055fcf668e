//! Connected repository model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A GitHub repository connected by a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Repo {
    /// Unique identifier for the repository row
    pub id: u64,

    /// Owner of the connection
    pub user_id: String,

    /// `owner/name` slug
    pub repo_name: String,

    /// Full GitHub URL
    pub repo_url: String,

    /// Whether new issues from this repository are processed
    pub is_active: bool,

    /// Timestamp when the repository was connected (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the row was last modified (UTC)
    pub updated_at: Timestamp,
}
