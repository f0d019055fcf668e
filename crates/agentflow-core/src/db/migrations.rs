//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Early databases had no files_changed column on pull_requests
        let has_files_changed: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('pull_requests') WHERE name = 'files_changed'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect pull_requests table")?;

        if !has_files_changed {
            self.connection
                .execute("ALTER TABLE pull_requests ADD COLUMN files_changed INTEGER", [])
                .db_context("Failed to add files_changed column to pull_requests table")?;
        }

        Ok(())
    }
}
