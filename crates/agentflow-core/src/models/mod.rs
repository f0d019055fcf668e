//! Data models for the dashboard.
//!
//! These are the rows the dashboard reads and writes: connected repositories,
//! the issues picked up from them, the pull requests produced for those
//! issues and the user's profile, plus the aggregated figures shown on the
//! stats cards. Display implementations live in [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use agentflow_core::models::{Repo, IssueStatus};
//! use jiff::Timestamp;
//!
//! let repo = Repo {
//!     id: 1,
//!     user_id: "local".to_string(),
//!     repo_name: "acme/web-app".to_string(),
//!     repo_url: "https://github.com/acme/web-app".to_string(),
//!     is_active: true,
//! #   created_at: Timestamp::now(),
//! #   updated_at: Timestamp::now(),
//! };
//! println!("{}", repo);
//! assert_eq!("coding".parse::<IssueStatus>(), Ok(IssueStatus::Coding));
//! ```

pub mod issue;
pub mod profile;
pub mod pull_request;
pub mod repo;
pub mod stats;
pub mod status;


pub use issue::{Issue, UNKNOWN_REPO};
pub use profile::Profile;
pub use pull_request::PullRequest;
pub use repo::Repo;
pub use stats::{DailyActivity, IssueStats, PrStats};
pub use status::{IssueStatus, PrStatus, RiskLevel};
