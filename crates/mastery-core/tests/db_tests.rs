//! Tests for the document store: raw key-value access plus the typed
//! load/save pairs and their malformed-document fallbacks.

use jiff::civil::date;
use mastery_core::{default_curriculum, Database, Journey, JourneyStatus};
use tempfile::TempDir;

fn open_test_database() -> (TempDir, Database) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db = Database::new(temp_dir.path().join("test.db")).expect("Failed to open database");
    (temp_dir, db)
}

#[test]
fn document_roundtrip_and_overwrite() {
    let (_temp_dir, mut db) = open_test_database();

    assert_eq!(db.get_document("modules").expect("get failed"), None);

    db.put_document("modules", "[1, 2]").expect("put failed");
    assert_eq!(
        db.get_document("modules").expect("get failed").as_deref(),
        Some("[1, 2]")
    );

    // Upsert replaces the value wholesale.
    db.put_document("modules", "[3]").expect("put failed");
    assert_eq!(
        db.get_document("modules").expect("get failed").as_deref(),
        Some("[3]")
    );
}

#[test]
fn missing_documents_yield_defaults() {
    let (_temp_dir, mut db) = open_test_database();

    let modules = db.load_modules().expect("load failed");
    assert_eq!(modules, default_curriculum());

    let journey = db.load_journey().expect("load failed");
    assert_eq!(journey, Journey::default());

    assert_eq!(db.load_exam_date().expect("load failed"), None);
}

#[test]
fn journey_roundtrip_preserves_timestamps() {
    let (_temp_dir, mut db) = open_test_database();

    let mut journey = Journey::default();
    let started = date(2026, 3, 2).at(9, 0, 0, 0).to_zoned(jiff::tz::TimeZone::UTC).unwrap();
    let paused = date(2026, 3, 5).at(12, 0, 0, 0).to_zoned(jiff::tz::TimeZone::UTC).unwrap();
    assert!(journey.start(&started));
    assert!(journey.pause(&paused));
    db.save_journey(&journey).expect("save failed");

    let loaded = db.load_journey().expect("load failed");
    assert_eq!(loaded, journey);
    assert_eq!(loaded.status, JourneyStatus::Paused);
    assert_eq!(loaded.paused_at, Some(paused.timestamp()));
}

#[test]
fn modules_roundtrip_preserves_planned_dates() {
    let (_temp_dir, mut db) = open_test_database();

    let mut modules = default_curriculum();
    modules[0].topics[0].planned_date = Some(date(2026, 3, 10));
    db.save_modules(&modules).expect("save failed");

    let loaded = db.load_modules().expect("load failed");
    assert_eq!(loaded[0].topics[0].planned_date, Some(date(2026, 3, 10)));
    assert_eq!(loaded, modules);
}

#[test]
fn exam_date_roundtrip() {
    let (_temp_dir, mut db) = open_test_database();

    db.save_exam_date(date(2026, 4, 13)).expect("save failed");
    assert_eq!(
        db.load_exam_date().expect("load failed"),
        Some(date(2026, 4, 13))
    );
}

#[test]
fn malformed_documents_fall_back_to_defaults() {
    let (_temp_dir, mut db) = open_test_database();

    db.put_document("modules", "not json").expect("put failed");
    db.put_document("journey", "{\"status\": 7}").expect("put failed");
    db.put_document("exam_date", "\"13/04/2026\"").expect("put failed");

    assert_eq!(db.load_modules().expect("load failed"), default_curriculum());
    assert_eq!(db.load_journey().expect("load failed"), Journey::default());
    assert_eq!(db.load_exam_date().expect("load failed"), None);
}

#[test]
fn persists_across_connections() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    {
        let mut db = Database::new(&db_path).expect("Failed to open database");
        db.save_exam_date(date(2026, 4, 13)).expect("save failed");
    }

    let mut db = Database::new(&db_path).expect("Failed to reopen database");
    assert_eq!(
        db.load_exam_date().expect("load failed"),
        Some(date(2026, 4, 13))
    );
}
