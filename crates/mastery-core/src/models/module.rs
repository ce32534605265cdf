//! Weekly module model definition.

use serde::{Deserialize, Serialize};

use super::Topic;

/// A weekly study module containing an ordered sequence of topics.
///
/// Modules are created once from the fixed curriculum template and mutated in
/// place; they are never added or removed at runtime. Topic order is the
/// intended study sequence and is preserved by every mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudyModule {
    /// Ordinal position (1..=N), also used as the week label
    pub id: u32,

    /// Display title of the module
    pub title: String,

    /// Short description of the module's focus
    pub description: String,

    /// Ordered study sequence of topics
    pub topics: Vec<Topic>,
}

impl StudyModule {
    /// The week label derived from the module's ordinal, e.g. `Week 3`.
    pub fn week_label(&self) -> String {
        format!("Week {}", self.id)
    }

    /// Number of completed topics in this module.
    pub fn completed_count(&self) -> usize {
        self.topics.iter().filter(|t| t.completed).count()
    }

    /// Whether every topic in this module is completed.
    pub fn is_complete(&self) -> bool {
        self.completed_count() == self.topics.len()
    }

    pub(crate) fn topic_mut(&mut self, topic_id: &str) -> Option<&mut Topic> {
        self.topics.iter_mut().find(|t| t.id == topic_id)
    }
}
