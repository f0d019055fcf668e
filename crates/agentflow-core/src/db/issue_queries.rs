//! Issue operations and queries.

use rusqlite::{params, OptionalExtension, Row};

use super::utils::{enum_column, id_column, now, optional_enum_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Issue, IssueStatus, RiskLevel, UNKNOWN_REPO},
    params::RecordIssue,
};

const ISSUE_COLUMNS: &str = "id, repo_id, user_id, issue_number, issue_title, issue_body, status, risk_level, created_at, updated_at";
const INSERT_ISSUE_SQL: &str = "INSERT INTO issues (repo_id, user_id, issue_number, issue_title, issue_body, status, risk_level, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";

impl super::Database {
    /// Builds an issue from a row; the repository name is left unresolved.
    fn build_issue_from_row(row: &Row<'_>) -> rusqlite::Result<Issue> {
        Ok(Issue {
            id: id_column(row, 0)?,
            repo_id: id_column(row, 1)?,
            user_id: row.get(2)?,
            issue_number: id_column(row, 3)?,
            issue_title: row.get(4)?,
            issue_body: row.get(5)?,
            status: enum_column(row, 6)?,
            risk_level: optional_enum_column(row, 7)?,
            created_at: timestamp_column(row, 8)?,
            updated_at: timestamp_column(row, 9)?,
            repo_name: UNKNOWN_REPO.to_string(),
        })
    }

    /// Records an issue for `user_id` with an already validated status.
    pub fn insert_issue(
        &mut self,
        user_id: &str,
        issue: &RecordIssue,
        status: IssueStatus,
        risk_level: Option<RiskLevel>,
    ) -> Result<Issue> {
        let now = now();
        let now_str = now.to_string();

        self.connection
            .execute(
                INSERT_ISSUE_SQL,
                params![
                    issue.repo_id as i64,
                    user_id,
                    issue.issue_number as i64,
                    &issue.title,
                    issue.body.as_deref(),
                    status.as_str(),
                    risk_level.as_ref().map(RiskLevel::as_str),
                    &now_str,
                    &now_str
                ],
            )
            .db_context("Failed to insert issue")?;

        Ok(Issue {
            id: self.connection.last_insert_rowid() as u64,
            repo_id: issue.repo_id,
            user_id: user_id.to_string(),
            issue_number: issue.issue_number,
            issue_title: issue.title.clone(),
            issue_body: issue.body.clone(),
            status,
            risk_level,
            created_at: now,
            updated_at: now,
            repo_name: UNKNOWN_REPO.to_string(),
        })
    }

    /// Retrieves one of the user's issues.
    pub fn get_issue(&self, user_id: &str, id: u64) -> Result<Option<Issue>> {
        let sql = format!("SELECT {ISSUE_COLUMNS} FROM issues WHERE id = ?1 AND user_id = ?2");
        self.connection
            .query_row(&sql, params![id as i64, user_id], Self::build_issue_from_row)
            .optional()
            .db_context("Failed to query issue")
    }

    /// Lists the user's issues, newest first, optionally capped at `limit`.
    pub fn list_issues(&self, user_id: &str, limit: Option<u32>) -> Result<Vec<Issue>> {
        let mut sql = format!(
            "SELECT {ISSUE_COLUMNS} FROM issues WHERE user_id = ?1 ORDER BY created_at DESC, id DESC"
        );
        if let Some(limit) = limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        let mut stmt = self
            .connection
            .prepare(&sql)
            .db_context("Failed to prepare query")?;

        let issues = stmt
            .query_map(params![user_id], Self::build_issue_from_row)
            .db_context("Failed to query issues")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch issues")?;

        Ok(issues)
    }
}
