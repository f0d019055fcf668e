//! Status enumerations for issues and pull requests.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Where an issue is in the agent pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum IssueStatus {
    /// Detected, not yet picked up
    #[default]
    Pending,
    /// Planner agent is analysing it
    Planning,
    /// Coder agent is producing changes
    Coding,
    /// Changes are under review
    Reviewing,
    /// A pull request was produced
    Completed,
    /// The pipeline gave up
    Failed,
}

impl FromStr for IssueStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(IssueStatus::Pending),
            "planning" => Ok(IssueStatus::Planning),
            "coding" => Ok(IssueStatus::Coding),
            "reviewing" => Ok(IssueStatus::Reviewing),
            "completed" => Ok(IssueStatus::Completed),
            "failed" => Ok(IssueStatus::Failed),
            _ => Err(format!("Invalid issue status: {s}")),
        }
    }
}

impl IssueStatus {
    /// Database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Pending => "pending",
            IssueStatus::Planning => "planning",
            IssueStatus::Coding => "coding",
            IssueStatus::Reviewing => "reviewing",
            IssueStatus::Completed => "completed",
            IssueStatus::Failed => "failed",
        }
    }

    /// Label with an icon, as shown in the recent issues list.
    ///
    /// ```rust
    /// use agentflow_core::models::IssueStatus;
    ///
    /// assert_eq!(IssueStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(IssueStatus::Coding.with_icon(), "➤ Coding");
    /// assert_eq!(IssueStatus::Pending.with_icon(), "○ Pending");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            IssueStatus::Pending => "○ Pending",
            IssueStatus::Planning => "➤ Planning",
            IssueStatus::Coding => "➤ Coding",
            IssueStatus::Reviewing => "➤ Reviewing",
            IssueStatus::Completed => "✓ Completed",
            IssueStatus::Failed => "✗ Failed",
        }
    }
}

/// Risk assessed by the planner for an issue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            _ => Err(format!("Invalid risk level: {s}")),
        }
    }
}

impl RiskLevel {
    /// Database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

/// Lifecycle of a generated pull request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PrStatus {
    #[default]
    Draft,
    Open,
    Merged,
    Closed,
}

impl FromStr for PrStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(PrStatus::Draft),
            "open" => Ok(PrStatus::Open),
            "merged" => Ok(PrStatus::Merged),
            "closed" => Ok(PrStatus::Closed),
            _ => Err(format!("Invalid pull request status: {s}")),
        }
    }
}

impl PrStatus {
    /// Database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrStatus::Draft => "draft",
            PrStatus::Open => "open",
            PrStatus::Merged => "merged",
            PrStatus::Closed => "closed",
        }
    }

    /// Draft and open pull requests still await a decision.
    pub fn is_pending(&self) -> bool {
        matches!(self, PrStatus::Draft | PrStatus::Open)
    }
}
