//! Progress and status summaries derived from the persisted state.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Journey, StudyModule};

/// Topic completion totals across the whole curriculum.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressSummary {
    /// Total number of topics across all modules
    pub total_topics: usize,
    /// Number of completed topics
    pub completed_topics: usize,
    /// Completion percentage rounded to the nearest integer, or `None` when
    /// there are no topics at all (never NaN)
    pub percentage: Option<u8>,
}

impl ProgressSummary {
    /// Computes the summary from the current module collection.
    pub fn from_modules(modules: &[StudyModule]) -> Self {
        let total_topics: usize = modules.iter().map(|m| m.topics.len()).sum();
        let completed_topics: usize = modules.iter().map(StudyModule::completed_count).sum();
        let percentage = if total_topics == 0 {
            None
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
            Some((completed_topics as f64 / total_topics as f64 * 100.0).round() as u8)
        };
        Self {
            total_topics,
            completed_topics,
            percentage,
        }
    }

    /// Number of topics still to complete.
    pub fn remaining_topics(&self) -> usize {
        self.total_topics - self.completed_topics
    }
}

/// Days remaining until the exam target day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamCountdown {
    /// The exam day
    pub date: Date,
    /// Signed day count; negative once the exam day has passed
    pub days_left: i64,
}

/// Everything the status view needs, assembled from one state snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusReport {
    pub journey: Journey,
    pub progress: ProgressSummary,
    /// Current consecutive-day completion streak
    pub streak: u32,
    /// 1-based day-of-journey counter (frozen while paused)
    pub current_day: i64,
    /// Whole days elapsed since the journey's start Monday
    pub days_since_start: i64,
    /// Exam countdown, when a target day has been set
    pub exam: Option<ExamCountdown>,
}
