//! Database operations and SQLite management for the dashboard.
//!
//! This module stands in for the hosted backend: a SQLite file holding the
//! connected repositories, recorded issues, pull requests and profiles. Every
//! query is scoped to a user id; joins and aggregations across tables happen in
//! [`crate::dashboard::aggregate`], not here.

use std::path::Path;

use log::debug;
use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod issue_queries;
pub mod migrations;
pub mod pr_queries;
pub mod profile_queries;
pub mod repo_queries;
pub mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Opening dashboard database at {}", path.display());
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database, used by tests.
    pub fn in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
