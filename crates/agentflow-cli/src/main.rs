//! AgentFlow CLI Application
//!
//! Command-line interface for the AgentFlow demo and dashboard.

mod args;
mod cli;
mod demo;
mod renderer;

use agentflow_core::DashboardBuilder;
use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        user,
        command,
    } = Args::parse();

    let renderer = TerminalRenderer::new(!no_color);

    info!("AgentFlow started");

    // The demo never touches the database
    let command = match command {
        Some(Demo(args)) => return demo::run(args, &renderer).await,
        other => other,
    };

    let dashboard = DashboardBuilder::new()
        .with_database_path(database_file)
        .with_user(user)
        .build()
        .await
        .context("Failed to initialize dashboard")?;

    let cli = Cli::new(dashboard, renderer);
    match command {
        Some(Repo { command }) => cli.handle_repo_command(command).await,
        Some(Issue { command }) => cli.handle_issue_command(command).await,
        Some(Pr { command }) => cli.handle_pr_command(command).await,
        Some(Activity) => cli.show_activity().await,
        Some(Profile { command }) => cli.handle_profile_command(command).await,
        Some(Demo(_)) | None => cli.show_overview().await,
    }
}
