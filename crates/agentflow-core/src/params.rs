//! Parameter structures for dashboard operations
//!
//! These structures carry input from an interface layer (the CLI today) into
//! [`crate::dashboard::Dashboard`] without any framework-specific derives.
//! Interface layers define their own argument types and convert into these
//! with `From` impls:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │───▶│  Core Params    │───▶│    Dashboard    │
//! │  (clap derives) │    │ (serde derives) │    │   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! String-typed fields (statuses, URLs) are parsed by the `validate` methods
//! so every interface reports the same error for the same bad input.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    error::{AgentFlowError, Result},
    models::{IssueStatus, PrStatus, RiskLevel},
};

/// Prefix stripped from a repository URL to derive its `owner/name` slug.
pub const GITHUB_URL_PREFIX: &str = "https://github.com/";

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for connecting a repository.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddRepo {
    /// Full GitHub URL of the repository
    pub repo_url: String,
    /// Display name; derived from the URL when omitted
    pub repo_name: Option<String>,
}

impl AddRepo {
    /// Validates the URL and resolves the repository name.
    ///
    /// # Errors
    ///
    /// * `AgentFlowError::InvalidInput` - When the URL is not a GitHub URL
    /// * `AgentFlowError::InvalidInput` - When no name can be derived
    ///
    /// # Examples
    ///
    /// ```rust
    /// use agentflow_core::params::AddRepo;
    ///
    /// let params = AddRepo {
    ///     repo_url: "https://github.com/acme/web-app".to_string(),
    ///     repo_name: None,
    /// };
    /// let (name, url) = params.validate()?;
    /// assert_eq!(name, "acme/web-app");
    /// assert_eq!(url, "https://github.com/acme/web-app");
    ///
    /// let bad = AddRepo {
    ///     repo_url: "https://gitlab.com/acme/web-app".to_string(),
    ///     repo_name: None,
    /// };
    /// assert!(bad.validate().is_err());
    /// # agentflow_core::Result::<()>::Ok(())
    /// ```
    pub fn validate(&self) -> Result<(String, String)> {
        let url = self.repo_url.trim();
        if !url.contains("github.com") {
            return Err(AgentFlowError::invalid_input("repo_url")
                .with_reason("Please enter a valid GitHub repository URL"));
        }

        let name = match self.repo_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => url
                .strip_prefix(GITHUB_URL_PREFIX)
                .unwrap_or(url)
                .trim_end_matches('/')
                .to_string(),
        };

        if name.is_empty() {
            return Err(AgentFlowError::invalid_input("repo_name")
                .with_reason("Cannot derive a repository name from the URL"));
        }

        Ok((name, url.to_string()))
    }
}

/// Parameters for enabling or disabling a connected repository.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleRepo {
    /// Repository ID
    pub id: u64,
    /// New active flag
    pub is_active: bool,
}

/// Parameters for recording an issue picked up from a repository.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordIssue {
    /// Repository the issue belongs to
    pub repo_id: u64,
    /// GitHub issue number
    pub issue_number: u64,
    /// Issue title
    pub title: String,
    /// Optional issue body
    pub body: Option<String>,
    /// Pipeline status; defaults to 'pending'
    pub status: Option<String>,
    /// Planner risk assessment ('low', 'medium' or 'high')
    pub risk_level: Option<String>,
}

impl RecordIssue {
    /// Parses the status and risk level.
    ///
    /// # Errors
    ///
    /// * `AgentFlowError::InvalidInput` - When the title is blank
    /// * `AgentFlowError::InvalidInput` - When status or risk level is unknown
    pub fn validate(&self) -> Result<(IssueStatus, Option<RiskLevel>)> {
        if self.title.trim().is_empty() {
            return Err(AgentFlowError::invalid_input("title").with_reason("Title cannot be empty"));
        }

        let status = parse_field::<IssueStatus>("status", self.status.as_deref())?.unwrap_or_default();
        let risk_level = parse_field::<RiskLevel>("risk_level", self.risk_level.as_deref())?;
        Ok((status, risk_level))
    }
}

/// Parameters for recording a pull request produced for an issue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordPullRequest {
    /// Issue the pull request resolves
    pub issue_id: u64,
    /// GitHub pull request number, if opened
    pub pr_number: Option<u64>,
    /// GitHub URL, if opened
    pub pr_url: Option<String>,
    /// Review status; defaults to 'draft'
    pub status: Option<String>,
    /// Number of files touched
    pub files_changed: Option<u32>,
}

impl RecordPullRequest {
    /// Parses the status.
    ///
    /// # Errors
    ///
    /// * `AgentFlowError::InvalidInput` - When status is unknown
    pub fn validate(&self) -> Result<PrStatus> {
        Ok(parse_field::<PrStatus>("status", self.status.as_deref())?.unwrap_or_default())
    }
}

/// Parameters for saving the user's profile settings.
///
/// A field left as `None` keeps its stored value; a blank string clears it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfile {
    /// New display name
    pub full_name: Option<String>,
    /// New company
    pub company: Option<String>,
}

impl UpdateProfile {
    /// Trims the given fields, mapping blank values to an explicit clear.
    ///
    /// The outer `Option` tells whether a field was given at all.
    ///
    /// # Errors
    ///
    /// * `AgentFlowError::InvalidInput` - When neither field is given
    pub fn validate(&self) -> Result<(Option<Option<String>>, Option<Option<String>>)> {
        if self.full_name.is_none() && self.company.is_none() {
            return Err(AgentFlowError::invalid_input("profile")
                .with_reason("Provide a full name or a company to update"));
        }

        Ok((
            self.full_name.as_deref().map(clean_text),
            self.company.as_deref().map(clean_text),
        ))
    }
}

fn clean_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_field<T>(field: &str, value: Option<&str>) -> Result<Option<T>>
where
    T: FromStr<Err = String>,
{
    value
        .map(|raw| {
            T::from_str(raw)
                .map_err(|reason| AgentFlowError::invalid_input(field).with_reason(reason))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add_repo(url: &str, name: Option<&str>) -> AddRepo {
        AddRepo {
            repo_url: url.to_string(),
            repo_name: name.map(String::from),
        }
    }

    #[test]
    fn test_add_repo_derives_name_from_url() {
        let (name, url) = add_repo("https://github.com/acme/docs/", None)
            .validate()
            .unwrap();
        assert_eq!(name, "acme/docs");
        assert_eq!(url, "https://github.com/acme/docs/");
    }

    #[test]
    fn test_add_repo_explicit_name_wins() {
        let (name, _) = add_repo("https://github.com/acme/docs", Some("Docs"))
            .validate()
            .unwrap();
        assert_eq!(name, "Docs");
    }

    #[test]
    fn test_add_repo_blank_name_falls_back_to_url() {
        let (name, _) = add_repo("https://github.com/acme/docs", Some("  "))
            .validate()
            .unwrap();
        assert_eq!(name, "acme/docs");
    }

    #[test]
    fn test_add_repo_rejects_non_github_url() {
        match add_repo("https://example.com/acme/docs", None).validate() {
            Err(AgentFlowError::InvalidInput { field, reason }) => {
                assert_eq!(field, "repo_url");
                assert!(reason.contains("valid GitHub repository URL"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_add_repo_rejects_bare_prefix() {
        let result = add_repo("https://github.com/", None).validate();
        assert!(matches!(
            result,
            Err(AgentFlowError::InvalidInput { ref field, .. }) if field == "repo_name"
        ));
    }

    #[test]
    fn test_record_issue_defaults_to_pending() {
        let params = RecordIssue {
            repo_id: 1,
            issue_number: 12,
            title: "Fix API rate limiting bug".to_string(),
            ..Default::default()
        };
        assert_eq!(params.validate().unwrap(), (IssueStatus::Pending, None));
    }

    #[test]
    fn test_record_issue_parses_status_and_risk() {
        let params = RecordIssue {
            repo_id: 1,
            issue_number: 12,
            title: "Fix API rate limiting bug".to_string(),
            status: Some("coding".to_string()),
            risk_level: Some("high".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.validate().unwrap(),
            (IssueStatus::Coding, Some(RiskLevel::High))
        );
    }

    #[test]
    fn test_record_issue_rejects_unknown_risk() {
        let params = RecordIssue {
            title: "t".to_string(),
            risk_level: Some("extreme".to_string()),
            ..Default::default()
        };
        match params.validate() {
            Err(AgentFlowError::InvalidInput { field, reason }) => {
                assert_eq!(field, "risk_level");
                assert!(reason.contains("extreme"));
            }
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_record_issue_rejects_blank_title() {
        let params = RecordIssue {
            title: "   ".to_string(),
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_update_profile_trims_and_clears() {
        let params = UpdateProfile {
            full_name: Some("  Ada Lovelace ".to_string()),
            company: Some("   ".to_string()),
        };
        assert_eq!(
            params.validate().unwrap(),
            (Some(Some("Ada Lovelace".to_string())), Some(None))
        );

        let params = UpdateProfile {
            company: Some("Analytical Engines".to_string()),
            ..Default::default()
        };
        assert_eq!(
            params.validate().unwrap(),
            (None, Some(Some("Analytical Engines".to_string())))
        );
    }

    #[test]
    fn test_update_profile_requires_a_field() {
        match UpdateProfile::default().validate() {
            Err(AgentFlowError::InvalidInput { field, .. }) => assert_eq!(field, "profile"),
            other => panic!("Expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn test_record_pull_request_status() {
        let mut params = RecordPullRequest::default();
        assert_eq!(params.validate().unwrap(), PrStatus::Draft);
        params.status = Some("merged".to_string());
        assert_eq!(params.validate().unwrap(), PrStatus::Merged);
        params.status = Some("abandoned".to_string());
        assert!(params.validate().is_err());
    }
}
