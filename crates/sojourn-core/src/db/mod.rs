//! Document store operations and SQLite management for plans.
//!
//! This module is the persistence gateway of the Sojourn planning system.
//! Each plan is persisted as a single JSON document in the `plans` table,
//! with days and activities embedded as arrays inside it; there is no
//! normalization and no foreign keys. Every mutation of a day's activity
//! list is a read-modify-write of the owning plan document inside one
//! transaction, which gives single-document atomicity; concurrent writers
//! of the same plan are last-write-wins.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod activity_queries;
pub mod migrations;
pub mod plan_queries;

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
