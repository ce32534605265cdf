use jiff::{civil::date, tz::TimeZone, Zoned};
use mastery_core::{Tracker, TrackerBuilder};
use tempfile::TempDir;

/// Helper function to create a test tracker backed by a throwaway database
pub async fn create_test_tracker() -> (TempDir, Tracker) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let tracker = TrackerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create tracker");
    (temp_dir, tracker)
}

/// Fixed instant in UTC, for deterministic day arithmetic
pub fn at(y: i16, m: i8, d: i8, hour: i8) -> Zoned {
    date(y, m, d)
        .at(hour, 0, 0, 0)
        .to_zoned(TimeZone::UTC)
        .unwrap()
}
