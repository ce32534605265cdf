//! Parameter structures for tracker operations.
//!
//! These are interface-agnostic request types: the CLI defines thin clap
//! wrapper structs and converts into these via `From`, so the core stays
//! free of CLI-framework derives.

use jiff::civil::Date;

/// Flip a topic's completion flag (gated on an active journey).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleTopic {
    /// Ordinal id of the containing module
    pub module_id: u32,
    /// Topic id within the module, e.g. `w2-t3`
    pub topic_id: String,
}

/// Assign a planned study date to a topic (never gated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignDate {
    pub module_id: u32,
    pub topic_id: String,
    /// The day the user intends to study this topic
    pub date: Date,
}

/// Set the exam-countdown target day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamDate {
    pub date: Date,
}

/// Query the topics planned for a day; `None` means today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AgendaQuery {
    pub date: Option<Date>,
}
