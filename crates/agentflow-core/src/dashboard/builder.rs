//! Builder for creating and configuring Dashboard instances.

use std::path::{Path, PathBuf};

use log::info;
use tokio::task;

use super::Dashboard;
use crate::{
    db::Database,
    error::{AgentFlowError, Result},
};

/// User id used when none is configured.
pub const DEFAULT_USER: &str = "local";

/// Builder for creating and configuring Dashboard instances.
#[derive(Debug, Clone)]
pub struct DashboardBuilder {
    database_path: Option<PathBuf>,
    user_id: String,
}

impl DashboardBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            user_id: DEFAULT_USER.to_string(),
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/agentflow/agentflow.db` or
    /// `~/.local/share/agentflow/agentflow.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the user every operation is scoped to.
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Builds the configured dashboard, creating the database if needed.
    ///
    /// # Errors
    ///
    /// Returns `AgentFlowError::InvalidInput` if the user id is blank
    /// Returns `AgentFlowError::FileSystem` if the database path is invalid
    /// Returns `AgentFlowError::Database` if database initialization fails
    pub async fn build(self) -> Result<Dashboard> {
        let user_id = self.user_id.trim().to_string();
        if user_id.is_empty() {
            return Err(AgentFlowError::invalid_input("user_id").with_reason("Not authenticated"));
        }

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| AgentFlowError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), AgentFlowError>(())
        })
        .await
        .map_err(AgentFlowError::join)??;

        info!("Dashboard ready for user '{user_id}' at {}", db_path.display());
        Ok(Dashboard::new(db_path, user_id))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("agentflow")
            .place_data_file("agentflow.db")
            .map_err(|e| AgentFlowError::XdgDirectory(e.to_string()))
    }
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
