//! Error types for the employee store.

use thiserror::Error;

/// Errors returned by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A write collided with an existing unique value (the email column).
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// Any other `SQLite` failure.
    #[error("sqlite error: {0}")]
    Sqlite(rusqlite::Error),

    /// Connection pool error.
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// Schema migration failed.
    #[error("migration error: {message}")]
    Migration {
        /// Which migration failed and why.
        message: String,
    },

    /// Filesystem error while preparing the database location.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        if is_unique_violation(&err) {
            Self::UniqueViolation(err.to_string())
        } else {
            Self::Sqlite(err)
        }
    }
}

/// Whether the driver reported `SQLITE_CONSTRAINT_UNIQUE`.
///
/// Classified by extended result code; the message text is never inspected.
pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _)
            if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

/// Convenience alias for store results.
pub type Result<T> = std::result::Result<T, StoreError>;
