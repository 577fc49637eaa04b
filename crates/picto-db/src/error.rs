//! Database error types for picto-db.

use picto_core::errors::CoreError;
use thiserror::Error;

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Schema creation failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// A write violated a declared constraint (unique, foreign key, not null, length).
    #[error("Constraint violated: {0}")]
    Constraint(String),

    /// Stored rows could not be assembled into an entity graph.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

/// Primary `SQLite` result code shared by every constraint violation.
const SQLITE_CONSTRAINT: i32 = 19;

impl DatabaseError {
    /// Classify a libSQL error raised by a write. Extended result codes
    /// (unique, foreign key, not null, check) carry `SQLITE_CONSTRAINT` in
    /// their low byte.
    pub(crate) fn from_write(e: libsql::Error) -> Self {
        match e {
            libsql::Error::SqliteFailure(code, msg) if code & 0xff == SQLITE_CONSTRAINT => {
                Self::Constraint(msg)
            }
            other => Self::LibSql(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constraint_codes_classified_by_code() {
        // SQLITE_CONSTRAINT, _UNIQUE, _FOREIGNKEY, _CHECK
        for code in [19, 2067, 787, 275] {
            let err = DatabaseError::from_write(libsql::Error::SqliteFailure(
                code,
                "wording may change".into(),
            ));
            assert!(matches!(err, DatabaseError::Constraint(_)), "code {code}");
        }
    }

    #[test]
    fn other_failures_stay_libsql() {
        // SQLITE_ERROR, with constraint-like wording
        let err = DatabaseError::from_write(libsql::Error::SqliteFailure(
            1,
            "constraint failed".into(),
        ));
        assert!(matches!(err, DatabaseError::LibSql(_)));
    }
}
