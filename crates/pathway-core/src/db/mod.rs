//! SQLite storage behind [`crate::backend::SqliteBackend`].
//!
//! This module handles connections, schema management, and the query
//! interfaces for pathways, their tags, steps, and linked content.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

mod schema;
pub mod pathway_queries;
pub mod step_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
