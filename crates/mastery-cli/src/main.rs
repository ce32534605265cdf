//! Mastery CLI Application
//!
//! Command-line interface for the Mastery study-journey tracker.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mastery_core::TrackerBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, no_color, command } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Mastery started");

    let cli = Cli::new(tracker, renderer);
    match command {
        Some(Journey { command }) => cli.handle_journey_command(command).await,
        Some(Topic { command }) => cli.handle_topic_command(command).await,
        Some(Board) => cli.show_board().await,
        Some(Agenda(args)) => cli.show_agenda(args).await,
        Some(Analytics(args)) => cli.show_analytics(args).await,
        Some(Exam(args)) => cli.set_exam_date(args).await,
        Some(Status) | None => cli.show_status().await,
    }
}
