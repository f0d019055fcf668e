//! Pure joins and aggregations over rows returned by the store.

use std::collections::HashMap;

use jiff::{tz::TimeZone, SignedDuration, Timestamp};

use crate::models::{
    DailyActivity, Issue, IssueStats, IssueStatus, PrStats, PrStatus, PullRequest, Repo,
    UNKNOWN_REPO,
};

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Fills `repo_name` on each issue from `repos`, or [`UNKNOWN_REPO`].
pub fn join_repo_names(issues: Vec<Issue>, repos: &[Repo]) -> Vec<Issue> {
    let names: HashMap<u64, &str> = repos
        .iter()
        .map(|repo| (repo.id, repo.repo_name.as_str()))
        .collect();

    issues
        .into_iter()
        .map(|mut issue| {
            issue.repo_name = names
                .get(&issue.repo_id)
                .copied()
                .unwrap_or(UNKNOWN_REPO)
                .to_string();
            issue
        })
        .collect()
}

/// Counts total, completed and pending issues.
pub fn issue_stats(issues: &[Issue]) -> IssueStats {
    issues.iter().fold(IssueStats::default(), |mut stats, issue| {
        stats.total += 1;
        match issue.status {
            IssueStatus::Completed => stats.completed += 1,
            IssueStatus::Pending => stats.pending += 1,
            _ => {}
        }
        stats
    })
}

/// Counts total, merged and still-pending (draft or open) pull requests.
pub fn pr_stats(pull_requests: &[PullRequest]) -> PrStats {
    pull_requests
        .iter()
        .fold(PrStats::default(), |mut stats, pr| {
            stats.total += 1;
            if pr.status == PrStatus::Merged {
                stats.merged += 1;
            } else if pr.status.is_pending() {
                stats.pending += 1;
            }
            stats
        })
}

/// Buckets issues and pull requests created in the seven days up to `now`
/// by weekday in `tz`, always returning `Mon` through `Sun`.
pub fn weekly_activity(
    issues: &[Issue],
    pull_requests: &[PullRequest],
    now: Timestamp,
    tz: &TimeZone,
) -> Vec<DailyActivity> {
    let window_start = now
        .checked_sub(SignedDuration::from_hours(7 * 24))
        .unwrap_or(Timestamp::MIN);
    let in_window = |ts: &Timestamp| *ts > window_start && *ts <= now;
    let weekday =
        |ts: &Timestamp| ts.to_zoned(tz.clone()).weekday().to_monday_zero_offset() as usize;

    let mut days: Vec<DailyActivity> = WEEKDAYS
        .iter()
        .map(|day| DailyActivity {
            day: (*day).to_string(),
            issues: 0,
            prs: 0,
        })
        .collect();

    for created in issues.iter().map(|i| &i.created_at).filter(|ts| in_window(ts)) {
        days[weekday(created)].issues += 1;
    }
    for created in pull_requests
        .iter()
        .map(|pr| &pr.created_at)
        .filter(|ts| in_window(ts))
    {
        days[weekday(created)].prs += 1;
    }

    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RiskLevel;

    // 2024-01-01 was a Monday
    const MONDAY_NOON: i64 = 1_704_110_400;
    const DAY: i64 = 86_400;

    fn at(second: i64) -> Timestamp {
        Timestamp::from_second(second).unwrap()
    }

    fn issue(id: u64, repo_id: u64, status: IssueStatus, created: i64) -> Issue {
        Issue {
            id,
            repo_id,
            user_id: "alice".to_string(),
            issue_number: id,
            issue_title: format!("Issue {id}"),
            issue_body: None,
            status,
            risk_level: Some(RiskLevel::Low),
            created_at: at(created),
            updated_at: at(created),
            repo_name: UNKNOWN_REPO.to_string(),
        }
    }

    fn pr(id: u64, status: PrStatus, created: i64) -> PullRequest {
        PullRequest {
            id,
            issue_id: id,
            pr_number: Some(id),
            pr_url: None,
            status,
            files_changed: None,
            created_at: at(created),
            updated_at: at(created),
        }
    }

    fn repo(id: u64, name: &str) -> Repo {
        Repo {
            id,
            user_id: "alice".to_string(),
            repo_name: name.to_string(),
            repo_url: format!("https://github.com/{name}"),
            is_active: true,
            created_at: at(MONDAY_NOON),
            updated_at: at(MONDAY_NOON),
        }
    }

    #[test]
    fn test_join_repo_names_with_unknown_fallback() {
        let issues = vec![
            issue(1, 10, IssueStatus::Pending, MONDAY_NOON),
            issue(2, 99, IssueStatus::Pending, MONDAY_NOON),
        ];
        let joined = join_repo_names(issues, &[repo(10, "acme/web-app")]);
        assert_eq!(joined[0].repo_name, "acme/web-app");
        assert_eq!(joined[1].repo_name, UNKNOWN_REPO);
    }

    #[test]
    fn test_issue_stats_counts() {
        let issues = vec![
            issue(1, 1, IssueStatus::Completed, MONDAY_NOON),
            issue(2, 1, IssueStatus::Pending, MONDAY_NOON),
            issue(3, 1, IssueStatus::Pending, MONDAY_NOON),
            issue(4, 1, IssueStatus::Coding, MONDAY_NOON),
            issue(5, 1, IssueStatus::Failed, MONDAY_NOON),
        ];
        assert_eq!(
            issue_stats(&issues),
            IssueStats {
                total: 5,
                completed: 1,
                pending: 2,
            }
        );
        assert_eq!(issue_stats(&[]), IssueStats::default());
    }

    #[test]
    fn test_pr_stats_counts_draft_and_open_as_pending() {
        let prs = vec![
            pr(1, PrStatus::Draft, MONDAY_NOON),
            pr(2, PrStatus::Open, MONDAY_NOON),
            pr(3, PrStatus::Merged, MONDAY_NOON),
            pr(4, PrStatus::Closed, MONDAY_NOON),
        ];
        assert_eq!(
            pr_stats(&prs),
            PrStats {
                total: 4,
                merged: 1,
                pending: 2,
            }
        );
    }

    #[test]
    fn test_weekly_activity_buckets_by_weekday() {
        let now = at(MONDAY_NOON + 6 * DAY); // Sunday noon
        let issues = vec![
            issue(1, 1, IssueStatus::Pending, MONDAY_NOON),
            issue(2, 1, IssueStatus::Pending, MONDAY_NOON + 60),
            issue(3, 1, IssueStatus::Pending, MONDAY_NOON + 4 * DAY),
            // Previous week, outside the window
            issue(4, 1, IssueStatus::Pending, MONDAY_NOON - 2 * DAY),
        ];
        let prs = vec![pr(1, PrStatus::Open, MONDAY_NOON + 6 * DAY)];

        let activity = weekly_activity(&issues, &prs, now, &TimeZone::UTC);
        let days: Vec<_> = activity.iter().map(|d| d.day.as_str()).collect();
        assert_eq!(days, WEEKDAYS);
        assert_eq!(activity[0].issues, 2);
        assert_eq!(activity[4].issues, 1);
        assert_eq!(activity[5].issues, 0);
        assert_eq!(activity[6].prs, 1);
        assert_eq!(activity.iter().map(|d| d.issues).sum::<u32>(), 3);
    }

    #[test]
    fn test_weekly_activity_ignores_future_rows() {
        let now = at(MONDAY_NOON);
        let issues = vec![issue(1, 1, IssueStatus::Pending, MONDAY_NOON + DAY)];
        let activity = weekly_activity(&issues, &[], now, &TimeZone::UTC);
        assert!(activity.iter().all(|d| d.issues == 0 && d.prs == 0));
    }
}
