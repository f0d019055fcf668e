//! Pull request operations and queries.

use rusqlite::{params, Row};

use super::utils::{enum_column, id_column, now, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{PrStatus, PullRequest},
    params::RecordPullRequest,
};

const INSERT_PULL_REQUEST_SQL: &str = "INSERT INTO pull_requests (issue_id, pr_number, pr_url, status, files_changed, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
// Inner join: only pull requests whose issue belongs to the user
const SELECT_USER_PULL_REQUESTS_SQL: &str = "SELECT pr.id, pr.issue_id, pr.pr_number, pr.pr_url, pr.status, pr.files_changed, pr.created_at, pr.updated_at FROM pull_requests pr INNER JOIN issues i ON i.id = pr.issue_id WHERE i.user_id = ?1 ORDER BY pr.created_at DESC, pr.id DESC";

impl super::Database {
    fn build_pull_request_from_row(row: &Row<'_>) -> rusqlite::Result<PullRequest> {
        Ok(PullRequest {
            id: id_column(row, 0)?,
            issue_id: id_column(row, 1)?,
            pr_number: row.get::<_, Option<i64>>(2)?.map(|n| n as u64),
            pr_url: row.get(3)?,
            status: enum_column(row, 4)?,
            files_changed: row.get::<_, Option<i64>>(5)?.map(|n| n as u32),
            created_at: timestamp_column(row, 6)?,
            updated_at: timestamp_column(row, 7)?,
        })
    }

    /// Records a pull request for an issue with an already validated status.
    pub fn insert_pull_request(
        &mut self,
        pull_request: &RecordPullRequest,
        status: PrStatus,
    ) -> Result<PullRequest> {
        let now = now();
        let now_str = now.to_string();

        self.connection
            .execute(
                INSERT_PULL_REQUEST_SQL,
                params![
                    pull_request.issue_id as i64,
                    pull_request.pr_number.map(|n| n as i64),
                    pull_request.pr_url.as_deref(),
                    status.as_str(),
                    pull_request.files_changed,
                    &now_str,
                    &now_str
                ],
            )
            .db_context("Failed to insert pull request")?;

        Ok(PullRequest {
            id: self.connection.last_insert_rowid() as u64,
            issue_id: pull_request.issue_id,
            pr_number: pull_request.pr_number,
            pr_url: pull_request.pr_url.clone(),
            status,
            files_changed: pull_request.files_changed,
            created_at: now,
            updated_at: now,
        })
    }

    /// Lists pull requests for the user's issues, newest first.
    pub fn list_pull_requests(&self, user_id: &str) -> Result<Vec<PullRequest>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_USER_PULL_REQUESTS_SQL)
            .db_context("Failed to prepare query")?;

        let pull_requests = stmt
            .query_map(params![user_id], Self::build_pull_request_from_row)
            .db_context("Failed to query pull requests")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch pull requests")?;

        Ok(pull_requests)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        db::Database,
        models::{IssueStatus, PrStatus},
        params::{RecordIssue, RecordPullRequest},
    };

    #[test]
    fn test_pull_requests_filtered_by_issue_owner() {
        let mut db = Database::in_memory().unwrap();
        let issue = |number| RecordIssue {
            repo_id: 1,
            issue_number: number,
            title: "t".to_string(),
            ..Default::default()
        };
        let mine = db
            .insert_issue("alice", &issue(1), IssueStatus::Completed, None)
            .unwrap();
        let theirs = db
            .insert_issue("bob", &issue(2), IssueStatus::Completed, None)
            .unwrap();

        let pr = RecordPullRequest {
            issue_id: mine.id,
            pr_number: Some(42),
            pr_url: Some("https://github.com/acme/web-app/pull/42".to_string()),
            files_changed: Some(3),
            ..Default::default()
        };
        let inserted = db.insert_pull_request(&pr, PrStatus::Open).unwrap();
        db.insert_pull_request(
            &RecordPullRequest {
                issue_id: theirs.id,
                ..Default::default()
            },
            PrStatus::Draft,
        )
        .unwrap();

        let listed = db.list_pull_requests("alice").unwrap();
        assert_eq!(listed, vec![inserted]);
        assert_eq!(listed[0].files_changed, Some(3));
    }

    #[test]
    fn test_pull_request_requires_existing_issue() {
        let mut db = Database::in_memory().unwrap();
        let result = db.insert_pull_request(
            &RecordPullRequest {
                issue_id: 999,
                ..Default::default()
            },
            PrStatus::Draft,
        );
        assert!(result.is_err());
    }
}
