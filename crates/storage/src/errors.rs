//! Storage-specific error types.
//!
//! This module wraps MongoDB, filesystem and JSON errors and converts them to
//! the backend-agnostic error types defined in `quotes_core`.

use std::time::Duration;

use quotes_core::errors::{DatabaseError, Error};
use thiserror::Error;

/// Storage-specific errors.
///
/// These errors are internal to the storage layer and are converted to
/// `quotes_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("MongoDB operation failed: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Operation timed out after {0:?}")]
    Timeout(Duration),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Mongo(e) => Error::Database(DatabaseError::QueryFailed(e.to_string())),
            StorageError::Io(e) => Error::Database(DatabaseError::QueryFailed(e.to_string())),
            StorageError::Serialization(e) => Error::Database(DatabaseError::Internal(e.to_string())),
            StorageError::Timeout(elapsed) => Error::Database(DatabaseError::QueryFailed(
                format!("Operation timed out after {elapsed:?}"),
            )),
        }
    }
}

/// Extension trait for converting driver Results to core Results.
///
/// Provides `.into_core()` on any result whose error converts into
/// `StorageError`.
pub trait IntoCore<T> {
    fn into_core(self) -> quotes_core::Result<T>;
}

impl<T, E> IntoCore<T> for std::result::Result<T, E>
where
    E: Into<StorageError>,
{
    fn into_core(self) -> quotes_core::Result<T> {
        self.map_err(|e| Error::from(e.into()))
    }
}
