//! Command definitions and handlers for the dashboard commands.
//!
//! Argument structs carry clap derives and convert into the core parameter
//! types with `From` impls, so `agentflow_core::params` stays free of CLI
//! concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Dashboard
//! ```
//!
//! [`Cli`] runs the converted parameters against a [`Dashboard`] and hands
//! the markdown to the [`TerminalRenderer`].

use agentflow_core::{
    display::{Activity, Issues, OperationStatus, PullRequests, Repos},
    params::{AddRepo, Id, RecordIssue, RecordPullRequest, ToggleRepo, UpdateProfile},
    AgentFlowError, Dashboard,
};
use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use jiff::Timestamp;
use log::debug;

use crate::renderer::TerminalRenderer;

// ============================================================================
// Demo
// ============================================================================

/// Play the interactive pipeline demo
///
/// Steps through the scripted walkthrough (issue created, planner agent,
/// coder agent, pull request created) one step per interval, redrawing the
/// pipeline after every change. Press Ctrl-C to stop early.
#[derive(Args)]
pub struct DemoArgs {
    /// Delay between steps in milliseconds
    #[arg(long, default_value_t = 2000, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: u64,
    /// Play only the first N steps of the walkthrough
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub steps: Option<u32>,
}

// ============================================================================
// Repositories
// ============================================================================

/// Connect a GitHub repository
#[derive(Args)]
pub struct AddRepoArgs {
    /// Full repository URL, e.g. https://github.com/owner/repo
    pub url: String,
    /// Display name; defaults to owner/repo taken from the URL
    #[arg(short, long)]
    pub name: Option<String>,
}

impl From<AddRepoArgs> for AddRepo {
    fn from(val: AddRepoArgs) -> Self {
        AddRepo {
            repo_url: val.url,
            repo_name: val.name,
        }
    }
}

/// Enable or disable processing for a repository
///
/// Without `--state` the current setting is flipped.
#[derive(Args)]
pub struct ToggleRepoArgs {
    #[arg(help = "Unique identifier of the repository")]
    pub id: u64,
    #[arg(long, help = "Set the repository on or off instead of flipping it")]
    pub state: Option<RepoStateArg>,
}

/// Disconnect a repository
#[derive(Args)]
pub struct RemoveRepoArgs {
    #[arg(help = "Unique identifier of the repository to disconnect")]
    pub id: u64,
}

impl From<RemoveRepoArgs> for Id {
    fn from(val: RemoveRepoArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum RepoCommands {
    /// List connected repositories
    #[command(aliases = ["l", "ls"])]
    List,
    /// Connect a repository
    #[command(alias = "a")]
    Add(AddRepoArgs),
    /// Enable or disable a repository
    #[command(alias = "t")]
    Toggle(ToggleRepoArgs),
    /// Disconnect a repository
    #[command(aliases = ["rm", "d"])]
    Remove(RemoveRepoArgs),
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum RepoStateArg {
    On,
    Off,
}

// ============================================================================
// Issues
// ============================================================================

/// Record an issue picked up from a connected repository
#[derive(Args)]
pub struct AddIssueArgs {
    #[arg(help = "Unique identifier of the repository the issue belongs to")]
    pub repo_id: u64,
    #[arg(help = "GitHub issue number")]
    pub number: u64,
    /// Issue title
    pub title: String,
    #[arg(short, long, help = "Issue body")]
    pub body: Option<String>,
    #[arg(short, long, help = "Pipeline status (defaults to pending)")]
    pub status: Option<IssueStatusArg>,
    #[arg(short, long, help = "Risk assessed by the planner")]
    pub risk: Option<RiskLevelArg>,
}

impl From<AddIssueArgs> for RecordIssue {
    fn from(val: AddIssueArgs) -> Self {
        RecordIssue {
            repo_id: val.repo_id,
            issue_number: val.number,
            title: val.title,
            body: val.body,
            status: val.status.map(|s| s.as_str().to_string()),
            risk_level: val.risk.map(|r| r.as_str().to_string()),
        }
    }
}

/// Print totals as a stats card or JSON
#[derive(Args)]
pub struct StatsArgs {
    #[arg(long, help = "Print the figures as JSON")]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum IssueCommands {
    /// List the most recent issues
    #[command(aliases = ["l", "ls"])]
    List,
    /// Record an issue
    #[command(alias = "a")]
    Add(AddIssueArgs),
    /// Show issue totals
    #[command(alias = "s")]
    Stats(StatsArgs),
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum IssueStatusArg {
    Pending,
    Planning,
    Coding,
    Reviewing,
    Completed,
    Failed,
}

impl IssueStatusArg {
    fn as_str(self) -> &'static str {
        match self {
            IssueStatusArg::Pending => "pending",
            IssueStatusArg::Planning => "planning",
            IssueStatusArg::Coding => "coding",
            IssueStatusArg::Reviewing => "reviewing",
            IssueStatusArg::Completed => "completed",
            IssueStatusArg::Failed => "failed",
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum RiskLevelArg {
    Low,
    Medium,
    High,
}

impl RiskLevelArg {
    fn as_str(self) -> &'static str {
        match self {
            RiskLevelArg::Low => "low",
            RiskLevelArg::Medium => "medium",
            RiskLevelArg::High => "high",
        }
    }
}

// ============================================================================
// Pull requests
// ============================================================================

/// Record a pull request produced for an issue
#[derive(Args)]
pub struct AddPrArgs {
    #[arg(help = "Unique identifier of the issue the pull request resolves")]
    pub issue_id: u64,
    #[arg(short, long, help = "GitHub pull request number")]
    pub number: Option<u64>,
    #[arg(short, long, help = "GitHub pull request URL")]
    pub url: Option<String>,
    #[arg(short, long, help = "Review status (defaults to draft)")]
    pub status: Option<PrStatusArg>,
    #[arg(short, long, help = "Number of files touched")]
    pub files_changed: Option<u32>,
}

impl From<AddPrArgs> for RecordPullRequest {
    fn from(val: AddPrArgs) -> Self {
        RecordPullRequest {
            issue_id: val.issue_id,
            pr_number: val.number,
            pr_url: val.url,
            status: val.status.map(|s| s.as_str().to_string()),
            files_changed: val.files_changed,
        }
    }
}

#[derive(Subcommand)]
pub enum PrCommands {
    /// List pull requests, newest first
    #[command(aliases = ["l", "ls"])]
    List,
    /// Record a pull request
    #[command(alias = "a")]
    Add(AddPrArgs),
    /// Show pull request totals
    #[command(alias = "s")]
    Stats(StatsArgs),
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PrStatusArg {
    Draft,
    Open,
    Merged,
    Closed,
}

impl PrStatusArg {
    fn as_str(self) -> &'static str {
        match self {
            PrStatusArg::Draft => "draft",
            PrStatusArg::Open => "open",
            PrStatusArg::Merged => "merged",
            PrStatusArg::Closed => "closed",
        }
    }
}

// ============================================================================
// Profile
// ============================================================================

/// Update profile settings
///
/// Only the given fields change; pass an empty string to clear one.
#[derive(Args)]
pub struct SetProfileArgs {
    #[arg(long, help = "Display name")]
    pub full_name: Option<String>,
    #[arg(long, help = "Company name")]
    pub company: Option<String>,
}

impl From<SetProfileArgs> for UpdateProfile {
    fn from(val: SetProfileArgs) -> Self {
        UpdateProfile {
            full_name: val.full_name,
            company: val.company,
        }
    }
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the saved profile
    #[command(alias = "s")]
    Show,
    /// Update the profile
    Set(SetProfileArgs),
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs dashboard commands and renders their output.
pub struct Cli {
    dashboard: Dashboard,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(dashboard: Dashboard, renderer: TerminalRenderer) -> Self {
        Self {
            dashboard,
            renderer,
        }
    }

    pub async fn handle_repo_command(&self, command: RepoCommands) -> Result<()> {
        match command {
            RepoCommands::List => {
                let repos = self
                    .dashboard
                    .list_repos()
                    .await
                    .context("Failed to list repositories")?;
                self.renderer
                    .render(&format!("# Repositories\n\n{}", Repos(repos)))
            }
            RepoCommands::Add(args) => {
                let repo = self
                    .dashboard
                    .add_repo(&args.into())
                    .await
                    .map_err(|e| failed("add repository", e))?;
                self.report(&format!("Repository {} connected", repo.repo_name), &repo)
            }
            RepoCommands::Toggle(args) => {
                let is_active = match args.state {
                    Some(state) => state == RepoStateArg::On,
                    None => self.flipped_state(args.id).await?,
                };
                let repo = self
                    .dashboard
                    .toggle_repo(&ToggleRepo {
                        id: args.id,
                        is_active,
                    })
                    .await
                    .map_err(|e| failed("update repository", e))?;
                let state = if repo.is_active { "enabled" } else { "disabled" };
                self.report(&format!("Repository {} {state}", repo.repo_name), &repo)
            }
            RepoCommands::Remove(args) => {
                let repo = self
                    .dashboard
                    .delete_repo(&args.into())
                    .await
                    .map_err(|e| failed("remove repository", e))?;
                self.renderer.render(
                    &OperationStatus::success(format!("Repository {} removed", repo.repo_name))
                        .to_string(),
                )
            }
        }
    }

    pub async fn handle_issue_command(&self, command: IssueCommands) -> Result<()> {
        match command {
            IssueCommands::List => self.recent_issues().await,
            IssueCommands::Add(args) => {
                let issue = self
                    .dashboard
                    .record_issue(&args.into())
                    .await
                    .map_err(|e| failed("record issue", e))?;
                self.report(&format!("Issue #{} recorded", issue.issue_number), &issue)
            }
            IssueCommands::Stats(StatsArgs { json }) => {
                let stats = self
                    .dashboard
                    .issue_stats()
                    .await
                    .context("Failed to load issue stats")?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&stats)?);
                    Ok(())
                } else {
                    self.renderer.render(&stats.to_string())
                }
            }
        }
    }

    pub async fn handle_pr_command(&self, command: PrCommands) -> Result<()> {
        match command {
            PrCommands::List => {
                let pull_requests = self
                    .dashboard
                    .list_pull_requests()
                    .await
                    .context("Failed to list pull requests")?;
                self.renderer
                    .render(&format!("# Pull Requests\n\n{}", PullRequests(pull_requests)))
            }
            PrCommands::Add(args) => {
                let pull_request = self
                    .dashboard
                    .record_pull_request(&args.into())
                    .await
                    .map_err(|e| failed("record pull request", e))?;
                self.report("Pull request recorded", &pull_request)
            }
            PrCommands::Stats(StatsArgs { json }) => {
                let stats = self
                    .dashboard
                    .pr_stats()
                    .await
                    .context("Failed to load pull request stats")?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&stats)?);
                    Ok(())
                } else {
                    self.renderer.render(&stats.to_string())
                }
            }
        }
    }

    pub async fn handle_profile_command(&self, command: ProfileCommands) -> Result<()> {
        match command {
            ProfileCommands::Show => {
                let profile = self
                    .dashboard
                    .profile()
                    .await
                    .context("Failed to load profile")?;
                match profile {
                    Some(profile) => self.renderer.render(&profile.to_string()),
                    None => self.renderer.render(&format!(
                        "No profile saved for {}. Use `af profile set` to add one.",
                        self.dashboard.user_id()
                    )),
                }
            }
            ProfileCommands::Set(args) => {
                let profile = self
                    .dashboard
                    .update_profile(&args.into())
                    .await
                    .map_err(|e| failed("update profile", e))?;
                self.report("Profile updated successfully", &profile)
            }
        }
    }

    pub async fn show_activity(&self) -> Result<()> {
        let activity = self
            .dashboard
            .weekly_activity(Timestamp::now())
            .await
            .context("Failed to load weekly activity")?;
        self.renderer
            .render(&format!("# Weekly Activity\n\n{}", Activity(activity)))
    }

    /// Stats cards followed by the recent issues list.
    pub async fn show_overview(&self) -> Result<()> {
        let issue_stats = self
            .dashboard
            .issue_stats()
            .await
            .context("Failed to load issue stats")?;
        let pr_stats = self
            .dashboard
            .pr_stats()
            .await
            .context("Failed to load pull request stats")?;

        self.renderer
            .render(&format!("# Dashboard\n\n{issue_stats}\n{pr_stats}\n"))?;
        self.recent_issues().await
    }

    async fn recent_issues(&self) -> Result<()> {
        let issues = self
            .dashboard
            .recent_issues()
            .await
            .context("Failed to list recent issues")?;
        self.renderer
            .render(&format!("# Recent Issues\n\n{}", Issues(issues)))
    }

    async fn flipped_state(&self, id: u64) -> Result<bool> {
        let repos = self
            .dashboard
            .list_repos()
            .await
            .context("Failed to list repositories")?;
        let repo = repos
            .iter()
            .find(|repo| repo.id == id)
            .ok_or_else(|| failed("update repository", AgentFlowError::RepoNotFound { id }))?;
        debug!("Flipping repository {id} from is_active={}", repo.is_active);
        Ok(!repo.is_active)
    }

    fn report(&self, message: &str, resource: &impl std::fmt::Display) -> Result<()> {
        let status = OperationStatus::success(message);
        self.renderer.render(&format!("{status}\n{resource}"))
    }
}

/// Wraps a core error with the message a user should see for `action`.
fn failed(action: &str, error: AgentFlowError) -> anyhow::Error {
    let status = OperationStatus::from_error(action, &error);
    anyhow::Error::new(error).context(status.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_issue_args_into_params() {
        let params: RecordIssue = AddIssueArgs {
            repo_id: 1,
            number: 123,
            title: "Add dark mode toggle".to_string(),
            body: None,
            status: Some(IssueStatusArg::Coding),
            risk: Some(RiskLevelArg::Low),
        }
        .into();
        assert_eq!(params.status.as_deref(), Some("coding"));
        assert_eq!(params.risk_level.as_deref(), Some("low"));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_add_pr_args_into_params() {
        let params: RecordPullRequest = AddPrArgs {
            issue_id: 7,
            number: Some(42),
            url: None,
            status: Some(PrStatusArg::Merged),
            files_changed: Some(3),
        }
        .into();
        assert_eq!(params.issue_id, 7);
        assert_eq!(params.status.as_deref(), Some("merged"));
    }

    #[test]
    fn test_set_profile_args_into_params() {
        let params: UpdateProfile = SetProfileArgs {
            full_name: Some("Ada Lovelace".to_string()),
            company: None,
        }
        .into();
        assert_eq!(params.full_name.as_deref(), Some("Ada Lovelace"));
        assert!(params.company.is_none());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_failed_uses_validation_reason() {
        let error = AgentFlowError::invalid_input("repo_url")
            .with_reason("Please enter a valid GitHub repository URL");
        let wrapped = failed("add repository", error);
        assert_eq!(
            wrapped.to_string(),
            "Please enter a valid GitHub repository URL"
        );
    }
}
