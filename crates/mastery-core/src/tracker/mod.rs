//! High-level tracker API for the study journey.
//!
//! The [`Tracker`] is the coordinator between interface layers and the
//! document store: it loads the current state, applies a pure mutation or
//! projection, and writes the affected document back wholesale. The journey
//! gate on topic completion lives here — the store itself never checks it.
//!
//! Every operation takes the current instant as an explicit [`jiff::Zoned`]
//! argument; the core never reads the wall clock, which keeps the streak and
//! analytics computations deterministic under test.
//!
//! # Usage
//!
//! ```rust,no_run
//! use jiff::Zoned;
//! use mastery_core::TrackerBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new().build().await?;
//! let now = Zoned::now();
//!
//! tracker.start_journey(&now).await?;
//! let report = tracker.status(&now).await?;
//! println!("{report}");
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use tokio::task;

use crate::db::Database;
use crate::error::{Result, TrackerError};

pub mod builder;
pub mod handlers;


pub use builder::TrackerBuilder;

/// Main tracker interface for the study journey and its curriculum.
pub struct Tracker {
    pub(crate) db_path: PathBuf,
}

impl Tracker {
    /// Creates a new tracker with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Runs a closure against a fresh database connection on the blocking
    /// thread pool. Each operation is a complete load/mutate/save cycle.
    pub(crate) async fn with_db<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(|e| TrackerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
