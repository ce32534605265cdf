//! Topic model definition and completion bookkeeping.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

/// An individual study topic within a weekly module.
///
/// Invariant: `completed_at` is present if and only if `completed` is true.
/// Both fields are maintained together by [`Topic::set_completed`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Topic {
    /// Stable identifier, unique within its module (e.g. `w1-t3`)
    pub id: String,

    /// Display title of the topic
    pub title: String,

    /// Whether the topic has been studied
    pub completed: bool,

    /// Calendar day the user intends to study this topic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_date: Option<Date>,

    /// Instant the topic was marked complete (UTC)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
}

impl Topic {
    /// Creates a fresh, uncompleted topic.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed: false,
            planned_date: None,
            completed_at: None,
        }
    }

    /// Sets the completion flag, keeping `completed_at` in sync: stamped with
    /// `at` on completion, cleared on un-completion.
    pub fn set_completed(&mut self, completed: bool, at: Timestamp) {
        self.completed = completed;
        self.completed_at = completed.then_some(at);
    }
}
