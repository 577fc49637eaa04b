//! Schema creation.
//!
//! Embeds the SQL at compile time and executes it on database open. All
//! statements use `IF NOT EXISTS`, so re-running is a no-op.

use crate::PictoDb;
use crate::error::DatabaseError;

/// Initial schema: 5 tables, 5 indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl PictoDb {
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        tracing::debug!("schema ready");
        Ok(())
    }
}
