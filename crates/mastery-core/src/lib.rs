//! Core library for the Mastery study-journey tracker.
//!
//! This crate tracks a fixed six-week study plan: weekly modules of topics,
//! each markable complete and plannable to a calendar date, aggregated into
//! progress, streak, and analytics views. State persists in a local SQLite
//! key-value document store.
//!
//! # Architecture
//!
//! The core is split between a thin async facade and pure functions:
//!
//! - [`Tracker`] loads the persisted documents, applies a mutation or
//!   projection, and writes changed documents back wholesale.
//! - [`models`], [`store`], [`streak`], and [`analytics`] are pure: every
//!   computation takes the current instant as an explicit [`jiff::Zoned`]
//!   argument instead of reading the wall clock.
//! - [`display`] formats models and outcomes as markdown for the CLI's
//!   terminal renderer.
//!
//! Domain-level rejections — toggling a topic while the journey is not
//! active, unknown ids, invalid lifecycle transitions — are silent no-ops
//! reported through outcome types, never errors.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use jiff::Zoned;
//! use mastery_core::{params::ToggleTopic, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("mastery.db"))
//!     .build()
//!     .await?;
//!
//! let now = Zoned::now();
//! tracker.start_journey(&now).await?;
//!
//! let outcome = tracker
//!     .toggle_topic(
//!         &ToggleTopic {
//!             module_id: 1,
//!             topic_id: "w1-t1".to_string(),
//!         },
//!         &now,
//!     )
//!     .await?;
//! println!("{outcome}");
//!
//! let report = tracker.status(&now).await?;
//! println!("streak: {}", report.streak);
//! # Ok(())
//! # }
//! ```

pub mod analytics;
pub mod dates;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod store;
pub mod streak;
pub mod tracker;

// Re-export commonly used types
pub use analytics::{AnalyticsReport, RevisionPoint, StreakPoint, WeeklyCompletion};
pub use db::Database;
pub use display::{
    Agenda, AssignOutcome, LocalDateTime, ModuleBoard, OperationStatus, ToggleOutcome,
    TransitionOutcome,
};
pub use error::{Result, TrackerError};
pub use models::{
    default_curriculum, Journey, JourneyStatus, ProgressSummary, StatusReport, StudyModule, Topic,
};
pub use params::{AgendaQuery, AssignDate, ExamDate, ToggleTopic};
pub use streak::current_streak;
pub use tracker::{Tracker, TrackerBuilder};
