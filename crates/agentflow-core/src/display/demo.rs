//! Markdown projection of demo playback.
//!
//! [`DemoView`] pairs a catalog with one [`PlaybackState`] snapshot and never
//! holds on to the controller, so any number of views can render the same
//! run.

use std::fmt;

use crate::demo::{Catalog, PlaybackState};

/// Headline shown once every step has been played.
pub const COMPLETE_HEADLINE: &str = "PR Created Successfully!";

/// Read-only view of one playback snapshot.
///
/// # Examples
///
/// ```rust
/// use agentflow_core::{
///     demo::{Catalog, PlaybackState},
///     display::DemoView,
/// };
///
/// let catalog = Catalog::reference();
/// let state = PlaybackState {
///     current_step: 2,
///     is_playing: true,
///     is_complete: false,
/// };
/// let output = DemoView::new(&catalog, state).to_string();
/// assert!(output.contains("✓ ── ✓ ── ➤ ── 4"));
/// assert!(output.contains("\"task_id\": \"issue-123\""));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DemoView<'a> {
    catalog: &'a Catalog,
    state: PlaybackState,
}

/// How a single step is marked in the progress row and pipeline list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Done,
    InFlight,
    Waiting,
}

impl<'a> DemoView<'a> {
    pub fn new(catalog: &'a Catalog, state: PlaybackState) -> Self {
        Self { catalog, state }
    }

    /// Label of the primary control for this snapshot.
    pub fn control_label(&self) -> &'static str {
        if self.state.is_playing {
            "Pause"
        } else if self.state.is_complete {
            "Replay"
        } else {
            "Start Demo"
        }
    }

    fn mark(&self, index: u32) -> Mark {
        // `index` is the 0-based position; step `index + 1` is in flight
        // while the tick that reveals it is pending.
        if index < self.state.current_step {
            Mark::Done
        } else if index == self.state.current_step && self.state.is_playing {
            Mark::InFlight
        } else {
            Mark::Waiting
        }
    }

    fn fmt_progress(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marks: Vec<String> = (0..self.catalog.len())
            .map(|index| match self.mark(index) {
                Mark::Done => "✓".to_string(),
                Mark::InFlight => "➤".to_string(),
                Mark::Waiting => (index + 1).to_string(),
            })
            .collect();
        writeln!(f, "{}", marks.join(" ── "))
    }

    fn fmt_pipeline(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Pipeline Status")?;
        writeln!(f)?;
        for (index, step) in (0..).zip(self.catalog) {
            let icon = match self.mark(index) {
                Mark::Done => "✓",
                Mark::InFlight => "➤",
                Mark::Waiting => "○",
            };
            writeln!(f, "- {icon} **{}**: {}", step.title, step.description)?;
        }
        writeln!(f)
    }

    fn fmt_output(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## Agent Output")?;
        writeln!(f)?;

        let current = self.state.current_step;
        if current == 0 && !self.state.is_playing {
            writeln!(f, "_Press \"{}\" to begin._", self.control_label())?;
        } else if let Some(step) = self.catalog.step_at(current) {
            writeln!(f, "```{}", step.language)?;
            writeln!(f, "{}", step.payload)?;
            writeln!(f, "```")?;
        }

        if self.state.is_complete {
            writeln!(f)?;
            writeln!(f, "**{COMPLETE_HEADLINE}**")?;
            writeln!(f)?;
            writeln!(f, "The entire process took 4.2 seconds")?;
        }

        Ok(())
    }
}

impl fmt::Display for DemoView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# AgentFlow Demo")?;
        writeln!(f)?;
        self.fmt_progress(f)?;
        writeln!(f)?;
        self.fmt_pipeline(f)?;
        self.fmt_output(f)?;
        writeln!(f)?;
        writeln!(f, "Controls: [{}] [Reset]", self.control_label())
    }
}
