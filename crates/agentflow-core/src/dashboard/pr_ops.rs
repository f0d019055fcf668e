//! Pull request operations for the Dashboard.

use super::{aggregate, Dashboard};
use crate::{
    error::{AgentFlowError, Result},
    models::{PrStats, PullRequest},
    params::RecordPullRequest,
};

impl Dashboard {
    /// Records a pull request produced for one of the user's issues.
    ///
    /// # Errors
    ///
    /// Returns `AgentFlowError::InvalidInput` for an unknown status and
    /// `AgentFlowError::IssueNotFound` when the issue does not belong to
    /// this user.
    pub async fn record_pull_request(&self, params: &RecordPullRequest) -> Result<PullRequest> {
        let status = params.validate()?;
        let params = params.clone();

        self.with_db(move |db, user_id| {
            if db.get_issue(user_id, params.issue_id)?.is_none() {
                return Err(AgentFlowError::IssueNotFound {
                    id: params.issue_id,
                });
            }
            db.insert_pull_request(&params, status)
        })
        .await
    }

    /// Pull requests for the user's issues, newest first.
    pub async fn list_pull_requests(&self) -> Result<Vec<PullRequest>> {
        self.with_db(|db, user_id| db.list_pull_requests(user_id))
            .await
    }

    /// Totals for the pull request stats cards.
    pub async fn pr_stats(&self) -> Result<PrStats> {
        self.with_db(|db, user_id| {
            let pull_requests = db.list_pull_requests(user_id)?;
            Ok(aggregate::pr_stats(&pull_requests))
        })
        .await
    }
}
