//! Scripted walkthrough of the issue-to-pull-request pipeline.
//!
//! The demo is a fixed [`Catalog`] of steps played back one per interval by a
//! [`DemoController`]. Nothing here talks to a real agent; the payloads are
//! literal content.
//!
//! ```text
//! ┌─────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │   Catalog   │───▶│  DemoController  │───▶│    DemoView     │
//! │ (4 steps)   │    │ (machine + timer)│    │ (watch receiver)│
//! └─────────────┘    └──────────────────┘    └─────────────────┘
//! ```
//!
//! ## Phases
//!
//! | phase     | current_step | is_playing | is_complete |
//! |-----------|--------------|------------|-------------|
//! | Idle      | 0            | false      | false       |
//! | Advancing | 0..N         | true       | false       |
//! | Paused    | 1..N         | false      | false       |
//! | Complete  | N            | false      | true        |
//!
//! # Example
//!
//! ```rust
//! use agentflow_core::demo::DemoControllerBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let demo = DemoControllerBuilder::new().build()?;
//! let mut updates = demo.subscribe();
//! demo.play();
//!
//! while updates.changed().await.is_ok() {
//!     let state = *updates.borrow_and_update();
//!     println!("step {}", state.current_step);
//!     if state.is_complete {
//!         break;
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod controller;
pub mod machine;

pub use catalog::{Catalog, PayloadLanguage, Step};
pub use controller::{DemoController, DemoControllerBuilder, DEFAULT_TICK_INTERVAL};
pub use machine::{Phase, PlaybackMachine, PlaybackState, TimerEffect};
