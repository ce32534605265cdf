//! Data models for the study curriculum and the journey lifecycle.
//!
//! This module contains the core domain models of the Mastery study tracker.
//! Display implementations live in [`crate::display::models`] to keep data
//! structures and presentation logic separate.

pub mod curriculum;
pub mod journey;
pub mod module;
pub mod summary;
pub mod topic;

// Re-export all public types at the models level
pub use curriculum::default_curriculum;
pub use journey::{Journey, JourneyStatus, PauseWindow};
pub use module::StudyModule;
pub use summary::{ExamCountdown, ProgressSummary, StatusReport};
pub use topic::Topic;
