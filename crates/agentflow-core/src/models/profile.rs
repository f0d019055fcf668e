//! User profile model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Settings a user keeps about themselves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Owner of the profile
    pub user_id: String,

    /// Display name
    pub full_name: Option<String>,

    /// Organisation the user works for
    pub company: Option<String>,

    /// Timestamp of the first save (UTC)
    pub created_at: Timestamp,

    /// Timestamp of the latest save (UTC)
    pub updated_at: Timestamp,
}
