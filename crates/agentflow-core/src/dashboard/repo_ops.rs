//! Repository operations for the Dashboard.

use log::info;

use super::Dashboard;
use crate::{
    error::Result,
    models::Repo,
    params::{AddRepo, Id, ToggleRepo},
};

impl Dashboard {
    /// Lists connected repositories, newest first.
    pub async fn list_repos(&self) -> Result<Vec<Repo>> {
        self.with_db(|db, user_id| db.list_repos(user_id)).await
    }

    /// Connects a repository after validating its URL.
    ///
    /// # Errors
    ///
    /// Returns `AgentFlowError::InvalidInput` when the URL is not a GitHub
    /// repository URL.
    pub async fn add_repo(&self, params: &AddRepo) -> Result<Repo> {
        let (repo_name, repo_url) = params.validate()?;

        let repo = self
            .with_db(move |db, user_id| db.insert_repo(user_id, &repo_name, &repo_url))
            .await?;
        info!("Connected repository {} ({})", repo.repo_name, repo.id);
        Ok(repo)
    }

    /// Enables or disables processing for a repository.
    ///
    /// # Errors
    ///
    /// Returns `AgentFlowError::RepoNotFound` when the user has no such
    /// repository.
    pub async fn toggle_repo(&self, params: &ToggleRepo) -> Result<Repo> {
        let ToggleRepo { id, is_active } = *params;
        self.with_db(move |db, user_id| db.set_repo_active(user_id, id, is_active))
            .await
    }

    /// Disconnects a repository, returning the removed row.
    ///
    /// # Errors
    ///
    /// Returns `AgentFlowError::RepoNotFound` when the user has no such
    /// repository.
    pub async fn delete_repo(&self, params: &Id) -> Result<Repo> {
        let id = params.id;
        let repo = self
            .with_db(move |db, user_id| db.delete_repo(user_id, id))
            .await?;
        info!("Disconnected repository {} ({})", repo.repo_name, repo.id);
        Ok(repo)
    }
}
