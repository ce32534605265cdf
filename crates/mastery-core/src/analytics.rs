//! Stateless analytics projections over the module collection.
//!
//! Each series is recomputed in full from the current snapshot; nothing here
//! is cached or incremental. The two 30-day series cover the 31 calendar
//! days from 30 days ago through today inclusive, and are empty when no
//! topic has ever been completed.

use std::collections::HashMap;

use jiff::{civil::Date, ToSpan, Zoned};
use serde::Serialize;

use crate::models::StudyModule;
use crate::store::completion_days;

/// Days of history covered by the time series (plus today).
const HISTORY_DAYS: i64 = 30;

/// Topics completed per weekly module.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WeeklyCompletion {
    /// Week label, e.g. `Week 3`
    pub week: String,
    /// Completed topic count
    pub completed: usize,
    /// Total topic count
    pub total: usize,
}

/// Running streak value on one calendar day.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct StreakPoint {
    pub date: Date,
    pub streak: u32,
}

/// Number of topics completed on one calendar day.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RevisionPoint {
    pub date: Date,
    pub revisions: u32,
}

/// All three analytics series, computed from one snapshot.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AnalyticsReport {
    pub weekly_completion: Vec<WeeklyCompletion>,
    pub streak_history: Vec<StreakPoint>,
    pub revision_frequency: Vec<RevisionPoint>,
}

impl AnalyticsReport {
    /// Recomputes every series from the current module collection.
    pub fn from_snapshot(modules: &[StudyModule], now: &Zoned) -> Self {
        Self {
            weekly_completion: weekly_completion(modules),
            streak_history: streak_history(modules, now),
            revision_frequency: revision_frequency(modules, now),
        }
    }
}

/// Per-module completion counts, in module order.
pub fn weekly_completion(modules: &[StudyModule]) -> Vec<WeeklyCompletion> {
    modules
        .iter()
        .map(|m| WeeklyCompletion {
            week: m.week_label(),
            completed: m.completed_count(),
            total: m.topics.len(),
        })
        .collect()
}

/// Running streak counter over the last 31 days.
///
/// The counter increments on each day with at least one completion and
/// resets to 0 on a day without, except that today never resets (the day is
/// still in progress). Empty when there are no completions at all.
pub fn streak_history(modules: &[StudyModule], now: &Zoned) -> Vec<StreakPoint> {
    let days = completion_days(modules, now.time_zone());
    if days.is_empty() {
        return Vec::new();
    }

    let today = now.date();
    let start = today.saturating_sub(HISTORY_DAYS.days());
    let mut streak = 0;
    (0..=HISTORY_DAYS)
        .map(|offset| {
            let date = start.saturating_add(offset.days());
            if days.contains(&date) {
                streak += 1;
            } else if date != today {
                streak = 0;
            }
            StreakPoint { date, streak }
        })
        .collect()
}

/// Topics completed per day over the last 31 days.
///
/// Empty when there are no completions at all.
pub fn revision_frequency(modules: &[StudyModule], now: &Zoned) -> Vec<RevisionPoint> {
    let mut per_day: HashMap<Date, u32> = HashMap::new();
    for topic in modules.iter().flat_map(|m| &m.topics) {
        if !topic.completed {
            continue;
        }
        if let Some(ts) = topic.completed_at {
            let day = crate::dates::day_of(ts, now.time_zone());
            *per_day.entry(day).or_insert(0) += 1;
        }
    }
    if per_day.is_empty() {
        return Vec::new();
    }

    let start = now.date().saturating_sub(HISTORY_DAYS.days());
    (0..=HISTORY_DAYS)
        .map(|offset| {
            let date = start.saturating_add(offset.days());
            RevisionPoint {
                date,
                revisions: per_day.get(&date).copied().unwrap_or(0),
            }
        })
        .collect()
}
