//! Issue operations for the Dashboard.

use jiff::{tz::TimeZone, Timestamp};

use super::{aggregate, Dashboard, RECENT_ISSUES_LIMIT};
use crate::{
    error::{AgentFlowError, Result},
    models::{DailyActivity, Issue, IssueStats},
    params::RecordIssue,
};

impl Dashboard {
    /// Records an issue picked up from one of the user's repositories.
    ///
    /// # Errors
    ///
    /// Returns `AgentFlowError::InvalidInput` for an unknown status or risk
    /// level, and `AgentFlowError::RepoNotFound` when the repository is not
    /// connected for this user.
    pub async fn record_issue(&self, params: &RecordIssue) -> Result<Issue> {
        let (status, risk_level) = params.validate()?;
        let params = params.clone();

        self.with_db(move |db, user_id| {
            let repo = db
                .get_repo(user_id, params.repo_id)?
                .ok_or(AgentFlowError::RepoNotFound { id: params.repo_id })?;

            let mut issue = db.insert_issue(user_id, &params, status, risk_level)?;
            issue.repo_name = repo.repo_name;
            Ok(issue)
        })
        .await
    }

    /// The user's most recent issues with their repository names resolved.
    pub async fn recent_issues(&self) -> Result<Vec<Issue>> {
        self.with_db(|db, user_id| {
            let issues = db.list_issues(user_id, Some(RECENT_ISSUES_LIMIT))?;
            let repos = db.list_repos(user_id)?;
            Ok(aggregate::join_repo_names(issues, &repos))
        })
        .await
    }

    /// Totals for the issue stats cards.
    pub async fn issue_stats(&self) -> Result<IssueStats> {
        self.with_db(|db, user_id| {
            let issues = db.list_issues(user_id, None)?;
            Ok(aggregate::issue_stats(&issues))
        })
        .await
    }

    /// Issues and pull requests per weekday over the seven days up to `now`,
    /// bucketed in the system time zone.
    pub async fn weekly_activity(&self, now: Timestamp) -> Result<Vec<DailyActivity>> {
        self.with_db(move |db, user_id| {
            let issues = db.list_issues(user_id, None)?;
            let pull_requests = db.list_pull_requests(user_id)?;
            Ok(aggregate::weekly_activity(
                &issues,
                &pull_requests,
                now,
                &TimeZone::system(),
            ))
        })
        .await
    }
}
