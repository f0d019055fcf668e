//! Repository CRUD operations and queries.

use rusqlite::{params, OptionalExtension, Row};

use super::utils::{id_column, now, timestamp_column};
use crate::{
    error::{AgentFlowError, DatabaseResultExt, Result},
    models::Repo,
};

const REPO_COLUMNS: &str = "id, user_id, repo_name, repo_url, is_active, created_at, updated_at";
const INSERT_REPO_SQL: &str = "INSERT INTO github_repos (user_id, repo_name, repo_url, is_active, created_at, updated_at) VALUES (?1, ?2, ?3, 1, ?4, ?5)";
const UPDATE_REPO_ACTIVE_SQL: &str =
    "UPDATE github_repos SET is_active = ?1, updated_at = ?2 WHERE id = ?3 AND user_id = ?4";
const DELETE_REPO_SQL: &str = "DELETE FROM github_repos WHERE id = ?1 AND user_id = ?2";

impl super::Database {
    fn build_repo_from_row(row: &Row<'_>) -> rusqlite::Result<Repo> {
        Ok(Repo {
            id: id_column(row, 0)?,
            user_id: row.get(1)?,
            repo_name: row.get(2)?,
            repo_url: row.get(3)?,
            is_active: row.get(4)?,
            created_at: timestamp_column(row, 5)?,
            updated_at: timestamp_column(row, 6)?,
        })
    }

    /// Connects a repository for `user_id`. New repositories start active.
    pub fn insert_repo(&mut self, user_id: &str, repo_name: &str, repo_url: &str) -> Result<Repo> {
        let now = now();
        let now_str = now.to_string();

        self.connection
            .execute(INSERT_REPO_SQL, params![user_id, repo_name, repo_url, &now_str, &now_str])
            .db_context("Failed to insert repository")?;

        Ok(Repo {
            id: self.connection.last_insert_rowid() as u64,
            user_id: user_id.to_string(),
            repo_name: repo_name.to_string(),
            repo_url: repo_url.to_string(),
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves one of the user's repositories.
    pub fn get_repo(&self, user_id: &str, id: u64) -> Result<Option<Repo>> {
        let sql = format!("SELECT {REPO_COLUMNS} FROM github_repos WHERE id = ?1 AND user_id = ?2");
        self.connection
            .query_row(&sql, params![id as i64, user_id], Self::build_repo_from_row)
            .optional()
            .db_context("Failed to query repository")
    }

    /// Lists the user's repositories, newest first.
    pub fn list_repos(&self, user_id: &str) -> Result<Vec<Repo>> {
        let sql = format!(
            "SELECT {REPO_COLUMNS} FROM github_repos WHERE user_id = ?1 ORDER BY created_at DESC, id DESC"
        );
        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        let repos = stmt
            .query_map(params![user_id], Self::build_repo_from_row)
            .db_context("Failed to query repositories")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch repositories")?;

        Ok(repos)
    }

    /// Sets the active flag and returns the updated repository.
    pub fn set_repo_active(&mut self, user_id: &str, id: u64, is_active: bool) -> Result<Repo> {
        let updated = self
            .connection
            .execute(
                UPDATE_REPO_ACTIVE_SQL,
                params![is_active, now().to_string(), id as i64, user_id],
            )
            .db_context("Failed to update repository")?;

        if updated == 0 {
            return Err(AgentFlowError::RepoNotFound { id });
        }

        self.get_repo(user_id, id)?
            .ok_or(AgentFlowError::RepoNotFound { id })
    }

    /// Disconnects a repository and returns the removed row.
    ///
    /// Issues recorded against it are kept.
    pub fn delete_repo(&mut self, user_id: &str, id: u64) -> Result<Repo> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let sql = format!("SELECT {REPO_COLUMNS} FROM github_repos WHERE id = ?1 AND user_id = ?2");
        let repo = tx
            .query_row(&sql, params![id as i64, user_id], Self::build_repo_from_row)
            .optional()
            .db_context("Failed to query repository")?
            .ok_or(AgentFlowError::RepoNotFound { id })?;

        tx.execute(DELETE_REPO_SQL, params![id as i64, user_id])
            .db_context("Failed to delete repository")?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(repo)
    }
}
