//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, PlannerError, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Execute the schema SQL
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Early databases kept the status only inside the document; the
        // column was extracted later for listing. Backfill it when missing.
        let has_status_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('plans') WHERE name = 'status'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_status_column {
            self.connection
                .execute(
                    "ALTER TABLE plans ADD COLUMN status TEXT NOT NULL DEFAULT 'draft'",
                    [],
                )
                .map_err(|e| {
                    PlannerError::database_error("Failed to add status column to plans table", e)
                })?;
            self.connection
                .execute(
                    "UPDATE plans SET status = COALESCE(json_extract(document, '$.status'), 'draft')",
                    [],
                )
                .map_err(|e| {
                    PlannerError::database_error("Failed to backfill plan status column", e)
                })?;
        }

        Ok(())
    }
}
