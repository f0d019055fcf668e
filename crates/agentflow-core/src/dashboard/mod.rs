//! High-level dashboard API over the local store.
//!
//! [`Dashboard`] answers the questions the dashboard screens ask: which
//! repositories are connected, what recently happened to their issues, and
//! how the pull requests are doing. It also keeps the user's profile
//! settings. Every operation is scoped to the user the dashboard was built
//! for.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Dashboard    │    │    aggregate    │    │    Database     │
//! │ (repo_ops,      │───▶│ (joins, stats,  │◀───│   (via db/)     │
//! │  issue_ops, ..) │    │  activity)      │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Database work runs on tokio's blocking pool; each call opens its own
//! connection.
//!
//! # Example
//!
//! ```rust,no_run
//! use agentflow_core::{params::AddRepo, DashboardBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dashboard = DashboardBuilder::new()
//!     .with_database_path(Some("agentflow.db"))
//!     .with_user("local")
//!     .build()
//!     .await?;
//!
//! dashboard
//!     .add_repo(&AddRepo {
//!         repo_url: "https://github.com/acme/web-app".to_string(),
//!         repo_name: None,
//!     })
//!     .await?;
//!
//! let stats = dashboard.issue_stats().await?;
//! println!("{} issues, {} completed", stats.total, stats.completed);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::{
    db::Database,
    error::{AgentFlowError, Result},
};

pub mod aggregate;
pub mod builder;
pub mod issue_ops;
pub mod pr_ops;
pub mod profile_ops;
pub mod repo_ops;


pub use builder::DashboardBuilder;

/// Number of issues shown in the recent issues list.
pub const RECENT_ISSUES_LIMIT: u32 = 10;

/// Dashboard operations for a single user.
pub struct Dashboard {
    pub(crate) db_path: PathBuf,
    pub(crate) user_id: String,
}

impl Dashboard {
    pub(crate) fn new(db_path: PathBuf, user_id: String) -> Self {
        Self { db_path, user_id }
    }

    /// The user every operation is scoped to.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Runs `op` against a fresh connection on the blocking pool.
    pub(crate) async fn with_db<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database, &str) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        let user_id = self.user_id.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db, &user_id)
        })
        .await
        .map_err(AgentFlowError::join)?
    }
}
