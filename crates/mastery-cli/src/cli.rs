//! Command dispatch and argument wrappers.
//!
//! Each subcommand has a small clap argument struct here that converts into
//! the matching core parameter type, keeping the core free of clap derives:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```
//!
//! [`Cli`] owns the tracker and the renderer; every handler reads the clock
//! once with [`Zoned::now`] and passes the instant down, so the core itself
//! never touches the wall clock.

use anyhow::Result;
use clap::{Args, Subcommand};
use jiff::{civil::Date, Zoned};
use mastery_core::{
    params::{AgendaQuery, AssignDate, ExamDate, ToggleTopic},
    Tracker,
};

use crate::renderer::TerminalRenderer;

/// Journey lifecycle commands
///
/// The journey is a three-state machine: `not-started` → `active` ⇄ `paused`.
/// A command that does not match the current state is reported and ignored.
#[derive(Subcommand)]
pub enum JourneyCommands {
    /// Start the journey (start date snaps to the Monday of this week)
    Start,
    /// Pause the journey, freezing the day counter and streak
    Pause,
    /// Resume a paused journey
    Resume,
}

/// Topic commands
#[derive(Subcommand)]
pub enum TopicCommands {
    /// Toggle a topic's completion (only while the journey is active)
    #[command(alias = "d")]
    Done(ToggleTopicArgs),
    /// Assign a topic to a calendar day (allowed in any journey state)
    #[command(alias = "p")]
    Plan(PlanTopicArgs),
}

/// Toggle a topic's completion flag
#[derive(Args)]
pub struct ToggleTopicArgs {
    /// Week number of the module containing the topic (1-6)
    pub module_id: u32,
    /// Identifier of the topic, e.g. w1-t3
    pub topic_id: String,
}

impl From<ToggleTopicArgs> for ToggleTopic {
    fn from(val: ToggleTopicArgs) -> Self {
        ToggleTopic {
            module_id: val.module_id,
            topic_id: val.topic_id,
        }
    }
}

/// Assign a topic to a study day
#[derive(Args)]
pub struct PlanTopicArgs {
    /// Week number of the module containing the topic (1-6)
    pub module_id: u32,
    /// Identifier of the topic, e.g. w1-t3
    pub topic_id: String,
    /// Planned study date (YYYY-MM-DD)
    pub date: Date,
}

impl From<PlanTopicArgs> for AssignDate {
    fn from(val: PlanTopicArgs) -> Self {
        AssignDate {
            module_id: val.module_id,
            topic_id: val.topic_id,
            date: val.date,
        }
    }
}

/// Show the topics planned for a day
#[derive(Args)]
pub struct AgendaArgs {
    /// Day to show (YYYY-MM-DD); today when omitted
    pub date: Option<Date>,
}

impl From<AgendaArgs> for AgendaQuery {
    fn from(val: AgendaArgs) -> Self {
        AgendaQuery { date: val.date }
    }
}

/// Show the completion analytics series
#[derive(Args)]
pub struct AnalyticsArgs {
    /// Print the raw series as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Set the exam-countdown date
#[derive(Args)]
pub struct ExamArgs {
    /// Exam date (YYYY-MM-DD)
    pub date: Date,
}

impl From<ExamArgs> for ExamDate {
    fn from(val: ExamArgs) -> Self {
        ExamDate { date: val.date }
    }
}

/// Command dispatcher: runs tracker operations and renders their output.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub async fn handle_journey_command(&self, command: JourneyCommands) -> Result<()> {
        let now = Zoned::now();
        let outcome = match command {
            JourneyCommands::Start => self.tracker.start_journey(&now).await?,
            JourneyCommands::Pause => self.tracker.pause_journey(&now).await?,
            JourneyCommands::Resume => self.tracker.resume_journey(&now).await?,
        };
        self.renderer.render(&outcome.to_string())
    }

    pub async fn handle_topic_command(&self, command: TopicCommands) -> Result<()> {
        match command {
            TopicCommands::Done(args) => {
                let now = Zoned::now();
                let outcome = self.tracker.toggle_topic(&args.into(), &now).await?;
                self.renderer.render(&outcome.to_string())
            }
            TopicCommands::Plan(args) => {
                let outcome = self.tracker.assign_date(&args.into()).await?;
                self.renderer.render(&outcome.to_string())
            }
        }
    }

    pub async fn show_status(&self) -> Result<()> {
        let report = self.tracker.status(&Zoned::now()).await?;
        self.renderer.render(&report.to_string())
    }

    pub async fn show_board(&self) -> Result<()> {
        let board = self.tracker.board().await?;
        self.renderer.render(&board.to_string())
    }

    pub async fn show_agenda(&self, args: AgendaArgs) -> Result<()> {
        let now = Zoned::now();
        let agenda = self.tracker.agenda(&args.into(), &now).await?;
        self.renderer.render(&agenda.to_string())
    }

    pub async fn show_analytics(&self, args: AnalyticsArgs) -> Result<()> {
        let report = self.tracker.analytics(&Zoned::now()).await?;
        if args.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        } else {
            self.renderer.render(&report.to_string())
        }
    }

    pub async fn set_exam_date(&self, args: ExamArgs) -> Result<()> {
        let status = self.tracker.set_exam_date(&args.into()).await?;
        self.renderer.render(&status.to_string())
    }
}
