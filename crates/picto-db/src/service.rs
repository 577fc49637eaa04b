//! Service layer hosting every repository method.
//!
//! `PictoService` wraps `PictoDb`. Each module under `repos` adds methods via
//! its own `impl PictoService` block.

use crate::PictoDb;
use crate::error::DatabaseError;

pub struct PictoService {
    db: PictoDb,
}

impl PictoService {
    /// Open a local database and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or the schema
    /// cannot be created.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = PictoDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    #[must_use]
    pub const fn from_db(db: PictoDb) -> Self {
        Self { db }
    }

    #[must_use]
    pub const fn db(&self) -> &PictoDb {
        &self.db
    }
}
