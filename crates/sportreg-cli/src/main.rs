//! Sportreg CLI Application
//!
//! Command-line interface for the sportreg workout tracking tool.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use sportreg_core::TrackerBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        user,
        database_file,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    let renderer = TerminalRenderer::new(!no_color);
    let username = user.context("--user is required")?;

    info!("Sportreg started for user {username}");

    let cli = Cli::new(tracker, renderer, username);

    match command {
        Some(Commands::Workout { command }) => cli.handle_workout_command(command).await,
        Some(Commands::Plan { command }) => cli.handle_plan_command(command).await,
        Some(Commands::Report(args)) => cli.handle_report(args).await,
        None => cli.pending().await,
    }
}
