//! Display formatting for domain models, collections, and outcomes.
//!
//! The tracker follows a Display-based output architecture: domain models
//! and wrapper newtypes implement [`std::fmt::Display`] producing markdown,
//! and the CLI renders that markdown to the terminal. Keeping the
//! implementations here (rather than on the model definitions) separates the
//! data structures from their presentation.
//!
//! - [`models`]: Display implementations for domain models
//! - [`collections`]: wrappers for collections and composite views
//!   (module board, day agenda, analytics report)
//! - [`results`]: outcome types for mutating operations (toggle, assign,
//!   journey transitions)
//! - [`status`]: plain confirmation/status messages
//! - [`datetime`]: timestamp formatting in the system time zone

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Agenda, AgendaEntry, ModuleBoard};
pub use datetime::LocalDateTime;
pub use results::{AssignOutcome, ToggleOutcome, TransitionCommand, TransitionOutcome};
pub use status::OperationStatus;
