//! Display implementations for domain models.
//!
//! Kept apart from the model definitions so the models stay plain data.
//! Output is markdown for the terminal renderer.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    Issue, IssueStats, IssueStatus, PrStats, PrStatus, Profile, PullRequest, Repo, RiskLevel,
};

const NOT_SET: &str = "_not set_";

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PrStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Repo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_active { "Active" } else { "Inactive" };

        writeln!(f, "## {} (ID: {})", self.repo_name, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **URL**: {}", self.repo_url)?;
        writeln!(f, "- **Status**: {state}")?;
        writeln!(f, "- **Connected**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### #{} {} ({})",
            self.issue_number,
            self.issue_title,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- **Repository**: {}", self.repo_name)?;
        if let Some(risk) = &self.risk_level {
            writeln!(f, "- **Risk**: {risk}")?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        if let Some(body) = &self.issue_body {
            writeln!(f, "{body}")?;
            writeln!(f)?;
        }

        Ok(())
    }
}

impl fmt::Display for PullRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.pr_number {
            Some(number) => writeln!(f, "### PR #{number} ({})", self.status)?,
            None => writeln!(f, "### PR for issue {} ({})", self.issue_id, self.status)?,
        }
        writeln!(f)?;

        if let Some(url) = &self.pr_url {
            writeln!(f, "- **URL**: {url}")?;
        }
        if let Some(files) = self.files_changed {
            writeln!(f, "- **Files changed**: {files}")?;
        }
        writeln!(f, "- **Created**: {}", LocalDateTime(&self.created_at))?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for IssueStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Issues")?;
        writeln!(f)?;
        writeln!(f, "- **Total**: {}", self.total)?;
        writeln!(f, "- **Completed**: {}", self.completed)?;
        writeln!(f, "- **Pending**: {}", self.pending)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Profile ({})", self.user_id)?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Full name**: {}",
            self.full_name.as_deref().unwrap_or(NOT_SET)
        )?;
        writeln!(f, "- **Company**: {}", self.company.as_deref().unwrap_or(NOT_SET))?;
        writeln!(f, "- **Updated**: {}", LocalDateTime(&self.updated_at))?;
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for PrStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Pull Requests")?;
        writeln!(f)?;
        writeln!(f, "- **Total**: {}", self.total)?;
        writeln!(f, "- **Merged**: {}", self.merged)?;
        writeln!(f, "- **Pending**: {}", self.pending)
    }
}
