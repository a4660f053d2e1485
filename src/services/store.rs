//! Paged record storage
//!
//! The pager only needs two things from storage: a page of records at an
//! offset, and a row count. `Store` captures that, so the interactive view can
//! run against SQLite in production and against an in-memory store in tests.

use crate::model::Record;

/// Offset/limit access to stored records.
pub trait Store {
    /// Up to `limit` records starting at row `offset`, in a stable order.
    ///
    /// An offset at or past the end yields an empty page, not an error.
    ///
    /// # Errors
    ///
    /// Returns `DataAccessError` if the backing store cannot be read.
    fn query(&self, offset: usize, limit: usize) -> Result<Vec<Record>, DataAccessError>;

    /// Number of stored records at the time of the call.
    ///
    /// # Errors
    ///
    /// Returns `DataAccessError` if the backing store cannot be read.
    fn count(&self) -> Result<usize, DataAccessError>;
}

/// Failure to read from (or write to) the store.
#[derive(Debug, thiserror::Error)]
pub enum DataAccessError {
    #[error("failed to {operation}")]
    Database {
        operation: &'static str,
        #[source]
        source: rusqlite::Error,
    },

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl DataAccessError {
    /// Adapter for `map_err` that tags a SQLite error with the operation that failed.
    pub fn database(operation: &'static str) -> impl FnOnce(rusqlite::Error) -> Self {
        move |source| Self::Database { operation, source }
    }

    /// The message followed by its immediate cause, for one-line status text.
    pub fn with_cause(&self) -> String {
        match std::error::Error::source(self) {
            Some(cause) => format!("{self}: {cause}"),
            None => self.to_string(),
        }
    }
}
