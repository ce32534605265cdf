//! Outcome types for mutating operations.
//!
//! Domain-level rejections (inactive journey, unknown ids, invalid
//! transitions) are ordinary outcomes rather than errors: the state is left
//! unchanged and the outcome's Display explains why.

use std::fmt;

use jiff::civil::Date;

use crate::models::{Journey, JourneyStatus, Topic};

/// Result of a topic completion toggle.
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    /// The topic is now completed
    Completed(Topic),
    /// The topic was completed and is now open again
    Reopened(Topic),
    /// The journey is not active; nothing changed
    JourneyInactive(JourneyStatus),
    /// Unknown module or topic id; nothing changed
    TopicNotFound { module_id: u32, topic_id: String },
}

impl fmt::Display for ToggleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToggleOutcome::Completed(topic) => {
                writeln!(f, "Completed **{}**.", topic.title)
            }
            ToggleOutcome::Reopened(topic) => {
                writeln!(f, "Reopened **{}** (completion cleared).", topic.title)
            }
            ToggleOutcome::JourneyInactive(status) => writeln!(
                f,
                "Ignored: topics can only be toggled while the journey is active \
                 (currently {}).",
                status.as_str()
            ),
            ToggleOutcome::TopicNotFound {
                module_id,
                topic_id,
            } => writeln!(
                f,
                "No topic '{topic_id}' in module {module_id}; nothing changed."
            ),
        }
    }
}

/// Result of a planned-date assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum AssignOutcome {
    /// The topic's planned date was set
    Assigned { topic: Topic, date: Date },
    /// Unknown module or topic id; nothing changed
    TopicNotFound { module_id: u32, topic_id: String },
}

impl fmt::Display for AssignOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssignOutcome::Assigned { topic, date } => {
                writeln!(f, "Planned **{}** for {date}.", topic.title)
            }
            AssignOutcome::TopicNotFound {
                module_id,
                topic_id,
            } => writeln!(
                f,
                "No topic '{topic_id}' in module {module_id}; nothing changed."
            ),
        }
    }
}

/// The three journey lifecycle commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionCommand {
    Start,
    Pause,
    Resume,
}

impl TransitionCommand {
    pub fn verb(&self) -> &'static str {
        match self {
            TransitionCommand::Start => "start",
            TransitionCommand::Pause => "pause",
            TransitionCommand::Resume => "resume",
        }
    }
}

/// Result of a journey lifecycle command.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionOutcome {
    /// The transition applied and the journey record was saved
    Applied {
        command: TransitionCommand,
        journey: Journey,
    },
    /// The transition was rejected by the state table; nothing changed
    Rejected {
        command: TransitionCommand,
        status: JourneyStatus,
    },
}

impl fmt::Display for TransitionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionOutcome::Applied { command, journey } => match command {
                TransitionCommand::Start => match journey.start_date {
                    Some(start) => {
                        writeln!(f, "Journey started: week of Monday {start}.")
                    }
                    None => writeln!(f, "Journey started."),
                },
                TransitionCommand::Pause => writeln!(
                    f,
                    "Journey paused. The day counter and streak are frozen until you resume."
                ),
                TransitionCommand::Resume => writeln!(f, "Journey resumed."),
            },
            TransitionOutcome::Rejected { command, status } => writeln!(
                f,
                "Cannot {} the journey while it is {}.",
                command.verb(),
                status.as_str()
            ),
        }
    }
}
