//! Storage, import, and process-level services (logging, terminal)

pub mod importer;
pub mod log_dirs;
#[cfg(any(test, feature = "test-support"))]
pub mod memory_store;
pub mod sqlite_store;
pub mod store;
pub mod terminal_modes;
pub mod tracing_setup;

pub use sqlite_store::SqliteStore;
pub use store::{DataAccessError, Store};

#[cfg(any(test, feature = "test-support"))]
pub use memory_store::MemoryStore;
