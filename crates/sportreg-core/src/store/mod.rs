//! Store adapter: SQLite-backed document collection for workout records.
//!
//! The store is the only collaborator the normalization core touches for
//! data. It behaves like an opaque, key-partitioned document collection:
//! per-user partition (`username`), `find` with field-equality filters,
//! sort by date, limit, and insert-one returning the generated id. The
//! full JSON document is the source of truth; the indexed columns are
//! query projections of fields inside it.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod queries;

/// Database connection and operations handler.
pub struct Store {
    connection: Connection,
}

impl Store {
    /// Creates a new store connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let store = Self { connection };
        store.initialize_schema()?;
        Ok(store)
    }
}
