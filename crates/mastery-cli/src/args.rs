use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{AgendaArgs, AnalyticsArgs, ExamArgs, JourneyCommands, TopicCommands};

/// Main command-line interface for the Mastery study tracker
///
/// Mastery tracks a six-week study plan from the terminal: start, pause, and
/// resume the journey, mark topics done, plan topics onto calendar days, and
/// review streak, progress, and analytics views. Running it with no command
/// prints the status report.
#[derive(Parser)]
#[command(version, about, name = "mst")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/mastery/mastery.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Mastery CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage the journey lifecycle
    #[command(alias = "j")]
    Journey {
        #[command(subcommand)]
        command: JourneyCommands,
    },
    /// Mark and plan topics
    #[command(alias = "t")]
    Topic {
        #[command(subcommand)]
        command: TopicCommands,
    },
    /// Show the full module checklist
    #[command(alias = "b")]
    Board,
    /// Show the status report (default command)
    #[command(alias = "s")]
    Status,
    /// Show the topics planned for a day
    #[command(alias = "a")]
    Agenda(AgendaArgs),
    /// Show the completion analytics series
    Analytics(AnalyticsArgs),
    /// Set the exam-countdown date
    Exam(ExamArgs),
}
