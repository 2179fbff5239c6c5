//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result, TrackerError};

impl super::Store {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
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
        // Databases created before plans existed have no kind column
        let has_kind_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('records') WHERE name = 'kind'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        if !has_kind_column {
            self.connection
                .execute(
                    "ALTER TABLE records ADD COLUMN kind TEXT NOT NULL DEFAULT 'workout'",
                    [],
                )
                .map_err(|e| {
                    TrackerError::database("Failed to add kind column to records table")
                        .with_source(e)
                })?;
        }

        // The index depends on the kind column, so it is created here
        // rather than in the schema file.
        self.connection
            .execute(
                "CREATE INDEX IF NOT EXISTS idx_records_user_kind ON records (username, kind)",
                [],
            )
            .db_context("Failed to create kind index")?;

        Ok(())
    }
}
