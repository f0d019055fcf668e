//! Terminal driver for the pipeline demo.
//!
//! Builds a [`DemoController`], starts playback and redraws a [`DemoView`]
//! for every snapshot published on the controller's watch channel. Stops on
//! completion or Ctrl-C.

use std::time::Duration;

use agentflow_core::{demo::Catalog, display::DemoView, DemoController, DemoControllerBuilder};
use anyhow::{Context, Result};
use log::{debug, info};

use crate::{cli::DemoArgs, renderer::TerminalRenderer};

pub async fn run(args: DemoArgs, renderer: &TerminalRenderer) -> Result<()> {
    let mut builder =
        DemoControllerBuilder::new().with_interval(Duration::from_millis(args.interval_ms));
    if let Some(steps) = args.steps {
        builder = builder.with_catalog(truncated_catalog(steps)?);
    }
    let demo = builder.build().context("Failed to start demo")?;

    info!(
        "Playing {} demo steps every {:?}",
        demo.catalog().len(),
        demo.interval()
    );
    play(&demo, renderer).await
}

async fn play(demo: &DemoController, renderer: &TerminalRenderer) -> Result<()> {
    let mut updates = demo.subscribe();
    demo.play();

    loop {
        let state = *updates.borrow_and_update();
        renderer.render_frame(&DemoView::new(demo.catalog(), state).to_string())?;
        if state.is_complete {
            return Ok(());
        }

        tokio::select! {
            changed = updates.changed() => {
                changed.context("Demo controller stopped unexpectedly")?;
            }
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to listen for Ctrl-C")?;
                demo.pause();
                debug!("Demo interrupted at {:?}", demo.state());
                return Ok(());
            }
        }
    }
}

/// The first `steps` steps of the reference walkthrough.
fn truncated_catalog(steps: u32) -> Result<Catalog> {
    let reference = Catalog::reference();
    if steps > reference.len() {
        anyhow::bail!(
            "The demo has {} steps; --steps must be between 1 and {}",
            reference.len(),
            reference.len()
        );
    }
    let catalog = Catalog::new(reference.iter().take(steps as usize).cloned().collect())?;
    Ok(catalog)
}
