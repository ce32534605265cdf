//! SQLite-backed local key-value store for the tracker's documents.
//!
//! The store holds a small number of independently-keyed JSON documents in a
//! single `documents` table (see `assets/schema.sql`). Every mutation reads
//! a whole document, produces a new one, and replaces it wholesale, so
//! readers never observe a partially updated document.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod documents;

/// Database connection and document operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens a database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Applies the embedded schema; idempotent on an existing database.
    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")
    }
}
