//! In-memory `Store` for tests
//!
//! Compiled for this crate's unit tests and, through the `test-support`
//! feature, for its integration tests. Release builds do not contain it.

use std::cell::{Cell, RefCell};

use super::store::{DataAccessError, Store};
use crate::model::Record;

/// In-memory store with failure injection.
///
/// Interior mutability keeps the `Store` methods `&self`, matching the SQLite
/// store, while still letting tests flip failures and shrink the data after the
/// store has been handed to a pager.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RefCell<Vec<Record>>,
    failing: Cell<bool>,
    queries: Cell<usize>,
}

impl MemoryStore {
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: RefCell::new(records),
            failing: Cell::new(false),
            queries: Cell::new(0),
        }
    }

    /// Store holding `count` generated records with ids `"0"`, `"1"`, ...
    pub fn with_generated(count: usize) -> Self {
        Self::new((0..count).map(generated_record).collect())
    }

    /// Make every subsequent `query`/`count` fail (or succeed again).
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    /// Drop every record past `len`, simulating rows deleted mid-session.
    pub fn truncate(&self, len: usize) {
        self.records.borrow_mut().truncate(len);
    }

    /// Number of `query` calls served or refused so far.
    pub fn query_calls(&self) -> usize {
        self.queries.get()
    }

    fn check_available(&self) -> Result<(), DataAccessError> {
        if self.failing.get() {
            return Err(DataAccessError::Unavailable(
                "memory store set to fail".to_string(),
            ));
        }
        Ok(())
    }
}

impl Store for MemoryStore {
    fn query(&self, offset: usize, limit: usize) -> Result<Vec<Record>, DataAccessError> {
        self.queries.set(self.queries.get() + 1);
        self.check_available()?;
        Ok(self
            .records
            .borrow()
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    fn count(&self) -> Result<usize, DataAccessError> {
        self.check_available()?;
        Ok(self.records.borrow().len())
    }
}

/// Deterministic record used by `MemoryStore::with_generated`.
pub fn generated_record(index: usize) -> Record {
    Record::from_fields([
        index.to_string(),
        format!("{}", index * 7),
        format!("First{index}"),
        format!("Last{index}"),
        if index % 2 == 0 { "M" } else { "F" }.to_string(),
        "Toronto".to_string(),
        "Ottawa".to_string(),
        "Engineer".to_string(),
        "2020-01-01".to_string(),
    ])
}
