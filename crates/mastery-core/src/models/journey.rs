//! Journey lifecycle state machine.
//!
//! A journey cycles between `active` and `paused` after a single `start`
//! transition; there is no terminal state. Rejected transitions are silent
//! no-ops reported through the boolean return values, never errors.

use std::str::FromStr;

use jiff::{civil::Date, Timestamp, Zoned};
use serde::{Deserialize, Serialize};

use crate::dates::{day_of, monday_of_week};

/// Type-safe enumeration of journey lifecycle states.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum JourneyStatus {
    /// Journey has never been started; topic completion is not yet allowed
    #[default]
    NotStarted,

    /// Journey is underway; topics may be completed
    Active,

    /// Journey is on hold; the day counter is frozen and completion is gated
    Paused,
}

impl FromStr for JourneyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "not-started" => Ok(JourneyStatus::NotStarted),
            "active" => Ok(JourneyStatus::Active),
            "paused" => Ok(JourneyStatus::Paused),
            _ => Err(format!("Invalid journey status: {s}")),
        }
    }
}

impl JourneyStatus {
    /// Convert to the canonical string representation used in documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            JourneyStatus::NotStarted => "not-started",
            JourneyStatus::Active => "active",
            JourneyStatus::Paused => "paused",
        }
    }
}

/// A time interval during which streak-breaking is suspended.
///
/// The interval is `[start, end)` after a completed pause/resume cycle, or
/// unbounded (`[start, +∞)`) while a never-resumed pause is in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauseWindow {
    pub start: Timestamp,
    pub end: Option<Timestamp>,
}

impl PauseWindow {
    /// Whether an instant falls inside the window.
    pub fn contains(&self, ts: Timestamp) -> bool {
        ts >= self.start && self.end.is_none_or(|end| ts < end)
    }
}

/// The overall lifecycle record of the study plan, independent of individual
/// topic completion.
///
/// Invariants:
/// - `NotStarted` ⇒ `start_date`, `paused_at`, and `resumed_at` are unset.
/// - `Active` after a resume ⇒ `resumed_at` is set and `paused_at` is
///   retained from the prior pause, together defining a completed pause
///   interval.
/// - `Paused` ⇒ `paused_at` is set; `resumed_at` is unset or refers to an
///   earlier pause/resume cycle, never the current one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Journey {
    /// Current lifecycle state
    #[serde(default)]
    pub status: JourneyStatus,

    /// Monday of the week the journey started, unset until started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Date>,

    /// Instant of the most recent pause transition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paused_at: Option<Timestamp>,

    /// Instant of the most recent resume transition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resumed_at: Option<Timestamp>,
}

impl Journey {
    /// Starts the journey, anchoring `start_date` to the Monday of the
    /// current week (a Sunday anchors to the preceding Monday).
    ///
    /// Returns `false` without any state change unless the journey is
    /// exactly `NotStarted`.
    pub fn start(&mut self, now: &Zoned) -> bool {
        if self.status != JourneyStatus::NotStarted {
            return false;
        }
        self.status = JourneyStatus::Active;
        self.start_date = Some(monday_of_week(now.date()));
        true
    }

    /// Pauses an active journey, stamping `paused_at`.
    ///
    /// Returns `false` without any state change unless the journey is
    /// `Active`.
    pub fn pause(&mut self, now: &Zoned) -> bool {
        if self.status != JourneyStatus::Active {
            return false;
        }
        self.status = JourneyStatus::Paused;
        self.paused_at = Some(now.timestamp());
        true
    }

    /// Resumes a paused journey, stamping `resumed_at`. The prior
    /// `paused_at` is retained so the completed pause interval stays
    /// recorded.
    ///
    /// Returns `false` without any state change unless the journey is
    /// `Paused`.
    pub fn resume(&mut self, now: &Zoned) -> bool {
        if self.status != JourneyStatus::Paused {
            return false;
        }
        self.status = JourneyStatus::Active;
        self.resumed_at = Some(now.timestamp());
        true
    }

    /// Whole calendar days elapsed from `start_date` to today; 0 if the
    /// journey has not started.
    pub fn days_since_start(&self, now: &Zoned) -> i64 {
        match self.start_date {
            Some(start) => i64::from((now.date() - start).get_days()),
            None => 0,
        }
    }

    /// 1-based day-of-journey counter; 0 if the journey has not started.
    ///
    /// While paused, the counter stays frozen at the day the pause began.
    pub fn current_day(&self, now: &Zoned) -> i64 {
        let Some(start) = self.start_date else {
            return 0;
        };
        if self.status == JourneyStatus::Paused {
            if let Some(paused_at) = self.paused_at {
                let pause_day = day_of(paused_at, now.time_zone());
                return i64::from((pause_day - start).get_days()) + 1;
            }
        }
        self.days_since_start(now) + 1
    }

    /// The interval during which streak-breaking is suspended, if any.
    ///
    /// A completed pause/resume cycle yields the bounded `[paused_at,
    /// resumed_at)` window; a never-resumed pause while currently `Paused`
    /// yields an unbounded window. Note that the bounded form takes
    /// precedence whenever both timestamps are set, even if `resumed_at`
    /// belongs to an earlier cycle.
    pub fn pause_window(&self) -> Option<PauseWindow> {
        match (self.paused_at, self.resumed_at) {
            (Some(start), Some(end)) => Some(PauseWindow {
                start,
                end: Some(end),
            }),
            (Some(start), None) if self.status == JourneyStatus::Paused => {
                Some(PauseWindow { start, end: None })
            }
            _ => None,
        }
    }
}
