//! Display formatting for dashboard models and demo playback.
//!
//! Domain models implement `Display` directly; collections and the demo get
//! wrapper types so each context can decide its own empty state and layout.
//! Everything here produces markdown, which the CLI renders with `termimad`
//! or prints as-is.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │    Wrappers     │    │   Formatted     │
//! │ (Repo, Issue,   │───▶│ (Issues, Repos, │───▶│    Output       │
//! │  PlaybackState) │    │  DemoView)      │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Repos, Issues, PullRequests,
//!   Activity)
//! - [`demo`]: Demo playback projection (DemoView)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Status Messages
//!
//! ```rust
//! use agentflow_core::display::OperationStatus;
//!
//! let success = OperationStatus::success("Repository connected".to_string());
//! assert_eq!(success.to_string(), "Success: Repository connected\n");
//!
//! let error = OperationStatus::failure("Please enter a valid GitHub repository URL".to_string());
//! println!("{}", error);
//! ```

pub mod collections;
pub mod datetime;
pub mod demo;
pub mod models;
pub mod status;

pub use collections::{Activity, Issues, PullRequests, Repos};
pub use datetime::LocalDateTime;
pub use demo::DemoView;
pub use status::OperationStatus;
