//! Typed access to the persisted documents.
//!
//! A document that is missing or fails to parse is replaced by its default
//! initial value at load time (logged as a warning); the core never tries to
//! repair partially-malformed input.

use jiff::civil::Date;
use log::warn;
use rusqlite::{params, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{DatabaseResultExt, Result};
use crate::models::{default_curriculum, Journey, StudyModule};

/// Document key for the ordered module collection.
pub const MODULES_KEY: &str = "modules";
/// Document key for the journey record.
pub const JOURNEY_KEY: &str = "journey";
/// Document key for the exam-countdown target day.
pub const EXAM_DATE_KEY: &str = "exam_date";

const SELECT_DOCUMENT_SQL: &str = "SELECT value FROM documents WHERE key = ?1";
const UPSERT_DOCUMENT_SQL: &str = "INSERT INTO documents (key, value) VALUES (?1, ?2) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value";

impl super::Database {
    /// Fetches a raw document by key.
    pub fn get_document(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_DOCUMENT_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to query document")
    }

    /// Stores a raw document, replacing any previous value wholesale.
    pub fn put_document(&mut self, key: &str, value: &str) -> Result<()> {
        self.connection
            .execute(UPSERT_DOCUMENT_SQL, params![key, value])
            .db_context("Failed to store document")?;
        Ok(())
    }

    fn load_or_default<T, F>(&self, key: &str, default: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.get_document(key)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(value),
                Err(e) => {
                    warn!("Malformed '{key}' document, falling back to the default: {e}");
                    Ok(default())
                }
            },
            None => Ok(default()),
        }
    }

    fn save_as_json<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.put_document(key, &raw)
    }

    /// Loads the module collection, falling back to the curriculum template.
    pub fn load_modules(&self) -> Result<Vec<StudyModule>> {
        self.load_or_default(MODULES_KEY, default_curriculum)
    }

    /// Persists the whole module collection.
    pub fn save_modules(&mut self, modules: &[StudyModule]) -> Result<()> {
        self.save_as_json(MODULES_KEY, &modules)
    }

    /// Loads the journey record, falling back to a not-started journey.
    pub fn load_journey(&self) -> Result<Journey> {
        self.load_or_default(JOURNEY_KEY, Journey::default)
    }

    /// Persists the journey record.
    pub fn save_journey(&mut self, journey: &Journey) -> Result<()> {
        self.save_as_json(JOURNEY_KEY, journey)
    }

    /// Loads the exam target day, if one has been set.
    pub fn load_exam_date(&self) -> Result<Option<Date>> {
        self.load_or_default(EXAM_DATE_KEY, || None)
    }

    /// Persists the exam target day.
    pub fn save_exam_date(&mut self, date: Date) -> Result<()> {
        self.save_as_json(EXAM_DATE_KEY, &date)
    }
}
