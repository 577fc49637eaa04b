//! # picto-db
//!
//! libSQL storage for the Picto schema.
//!
//! Creates the five tables declared in `picto_core::schema`, exposes one
//! repository module per entity on [`service::PictoService`], answers
//! foreign-key lookups (including both directions of the follower relation),
//! and loads stored rows into a `picto_core::graph::Graph` for `to_dict`
//! serialization.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Database handle: a libSQL database and its single connection.
pub struct PictoDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl PictoDb {
    /// Open a local database at the given path (`":memory:"` for tests).
    ///
    /// Enables foreign-key enforcement and creates the schema.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or the schema
    /// cannot be created.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let picto_db = Self { db, conn };
        picto_db.run_migrations().await?;
        tracing::debug!(path, "opened database");
        Ok(picto_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Run an INSERT and return the new row id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Constraint` if the row violates a declared
    /// constraint, or `DatabaseError::LibSql` for other failures.
    pub async fn insert(
        &self,
        sql: &str,
        params: impl libsql::params::IntoParams,
    ) -> Result<i64, DatabaseError> {
        self.conn
            .execute(sql, params)
            .await
            .map_err(DatabaseError::from_write)?;
        Ok(self.conn.last_insert_rowid())
    }
}
