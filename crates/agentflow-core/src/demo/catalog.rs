//! The fixed, ordered sequence of steps the demo plays back.

use std::{fmt, slice};

use serde::{Deserialize, Serialize};

use crate::error::{AgentFlowError, Result};

/// Display-only tag for a step payload.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PayloadLanguage {
    /// Structured agent output
    Json,
    /// A unified diff
    Diff,
}

impl PayloadLanguage {
    /// Fence tag used when rendering the payload as a markdown code block.
    pub fn as_str(&self) -> &'static str {
        match self {
            PayloadLanguage::Json => "json",
            PayloadLanguage::Diff => "diff",
        }
    }
}

impl fmt::Display for PayloadLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry in the demo narrative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    /// Dense ordinal, starting at 1
    pub id: u32,
    /// Short heading shown in the pipeline list
    pub title: String,
    /// One-line status text under the heading
    pub description: String,
    /// Literal text shown verbatim in the output panel
    pub payload: String,
    /// How the payload should be highlighted
    pub language: PayloadLanguage,
}

impl Step {
    fn new(
        id: u32,
        title: &str,
        description: &str,
        language: PayloadLanguage,
        payload: &str,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            payload: payload.to_string(),
            language,
        }
    }
}

/// Immutable ordered list of demo steps.
///
/// The length is fixed at construction; a controller shares its catalog
/// behind an `Arc` so the sequence cannot change during a playback run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    steps: Vec<Step>,
}

impl Catalog {
    /// Builds a catalog from explicit steps.
    ///
    /// # Errors
    ///
    /// Returns `AgentFlowError::InvalidInput` if `steps` is empty or the ids
    /// are not exactly `1..=N` in order.
    pub fn new(steps: Vec<Step>) -> Result<Self> {
        if steps.is_empty() {
            return Err(AgentFlowError::invalid_input("steps")
                .with_reason("a demo catalog needs at least one step"));
        }

        if let Some((position, step)) = steps
            .iter()
            .enumerate()
            .find(|(position, step)| step.id as usize != position + 1)
        {
            return Err(AgentFlowError::invalid_input("steps").with_reason(format!(
                "step at position {} has id {}, expected {}",
                position + 1,
                step.id,
                position + 1
            )));
        }

        Ok(Self { steps })
    }

    /// The four-step issue-to-pull-request walkthrough.
    pub fn reference() -> Self {
        Self {
            steps: vec![
                Step::new(
                    1,
                    "Issue Created",
                    "New GitHub issue detected",
                    PayloadLanguage::Json,
                    ISSUE_PAYLOAD,
                ),
                Step::new(
                    2,
                    "Planner Agent",
                    "Analyzing requirements...",
                    PayloadLanguage::Json,
                    PLAN_PAYLOAD,
                ),
                Step::new(
                    3,
                    "Coder Agent",
                    "Generating code changes...",
                    PayloadLanguage::Diff,
                    DIFF_PAYLOAD,
                ),
                Step::new(
                    4,
                    "PR Created",
                    "Pull request opened",
                    PayloadLanguage::Json,
                    PR_PAYLOAD,
                ),
            ],
        }
    }

    /// Returns the step with ordinal `index`, for `1 <= index <= len()`.
    pub fn step_at(&self, index: u32) -> Option<&Step> {
        let position = (index as usize).checked_sub(1)?;
        self.steps.get(position)
    }

    /// Number of steps, `N`.
    pub fn len(&self) -> u32 {
        self.steps.len() as u32
    }

    /// Always false for a constructed catalog; provided for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterates the steps in playback order.
    pub fn iter(&self) -> slice::Iter<'_, Step> {
        self.steps.iter()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::reference()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Step;
    type IntoIter = slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

const ISSUE_PAYLOAD: &str = r#"{
  "issue": {
    "title": "Add dark mode toggle",
    "body": "Users want dark mode",
    "labels": ["feature"]
  }
}"#;

const PLAN_PAYLOAD: &str = r#"{
  "task_id": "issue-123",
  "risk_level": "low",
  "affected_areas": ["ui/theme"],
  "acceptance_criteria": [
    "Toggle button in header",
    "Persist preference"
  ]
}"#;

const DIFF_PAYLOAD: &str = "diff --git a/src/components/Header.tsx\n\
+++ b/src/components/Header.tsx\n\
@@ -1,4 +1,5 @@\n\
+import { ThemeToggle } from './ThemeToggle'\n\
\x20\n\
\x20export const Header = () => (\n\
\x20  <header>\n\
+    <ThemeToggle />\n\
\x20  </header>\n\
\x20)";

const PR_PAYLOAD: &str = r#"{
  "pr_number": 42,
  "title": "feat: Add dark mode toggle",
  "files_changed": 3,
  "additions": 45,
  "deletions": 2,
  "status": "ready_for_review"
}"#;
