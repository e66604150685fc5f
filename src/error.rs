//! Error taxonomy for store operations.
//!
//! An absent key is not an error; lookups report it as `None`.

use std::path::PathBuf;
use std::time::Duration;

use rusqlite::ffi;
use rusqlite::ErrorCode;
use thiserror::Error;

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Key already exists: {key}")]
    DuplicateKey { key: String },

    #[error("Timed out after {timeout:?} waiting for store {}", .path.display())]
    Timeout { path: PathBuf, timeout: Duration },

    #[error("Failed to decode value for key {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: bincode::Error,
    },

    #[error("Failed to encode value: {0}")]
    Encode(#[source] bincode::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Classify a SQLite failure raised while working on the store at `path`.
    ///
    /// Lock contention that outlived the busy handler becomes [`StoreError::Timeout`]
    /// and a primary-key violation becomes [`StoreError::DuplicateKey`].
    pub(crate) fn from_sqlite(
        err: rusqlite::Error,
        path: &std::path::Path,
        timeout: Duration,
        key: Option<&str>,
    ) -> Self {
        let failure = err.sqlite_error().copied();
        match failure {
            Some(ffi::Error {
                code: ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked,
                ..
            }) => Self::Timeout {
                path: path.to_path_buf(),
                timeout,
            },
            Some(ffi::Error { extended_code, .. })
                if extended_code == ffi::SQLITE_CONSTRAINT_PRIMARYKEY =>
            {
                match key {
                    Some(key) => Self::DuplicateKey {
                        key: key.to_string(),
                    },
                    None => Self::Database(err),
                }
            }
            _ => Self::Database(err),
        }
    }

    /// Whether this error means the store could not be acquired in time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// Whether this error is a rejected insert of an existing key.
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::DuplicateKey { .. })
    }
}
