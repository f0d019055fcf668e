//! Core library for AgentFlow.
//!
//! Two independent pieces live here:
//!
//! - **Demo playback** ([`demo`]): a timer-driven state machine that plays the
//!   issue-to-pull-request walkthrough one step per interval, with
//!   play/pause/reset controls and a `watch` channel for observers.
//! - **Dashboard** ([`dashboard`]): connected repositories, recorded issues
//!   and pull requests in a local SQLite store, plus the stats and activity
//!   figures derived from them.
//!
//! Both produce markdown through the [`display`] module, which the CLI
//! renders in the terminal.
//!
//! # Quick Start
//!
//! ```rust
//! use agentflow_core::{display::DemoView, DemoControllerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let demo = DemoControllerBuilder::new().build()?;
//! let mut updates = demo.subscribe();
//! demo.play();
//!
//! while updates.changed().await.is_ok() {
//!     let state = *updates.borrow_and_update();
//!     println!("{}", DemoView::new(demo.catalog(), state));
//!     if state.is_complete {
//!         break;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod dashboard;
pub mod db;
pub mod demo;
pub mod display;
pub mod error;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use dashboard::{Dashboard, DashboardBuilder};
pub use db::Database;
pub use demo::{Catalog, DemoController, DemoControllerBuilder, Phase, PlaybackState};
pub use display::{Activity, DemoView, Issues, OperationStatus, PullRequests, Repos};
pub use error::{AgentFlowError, Result};
pub use models::{
    DailyActivity, Issue, IssueStats, IssueStatus, PrStats, PrStatus, Profile, PullRequest,
    Repo, RiskLevel,
};
pub use params::{AddRepo, Id, RecordIssue, RecordPullRequest, ToggleRepo, UpdateProfile};
