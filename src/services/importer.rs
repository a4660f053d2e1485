//! One-shot bulk import of the flat file into the store
//!
//! Parsing never aborts an import: malformed lines are skipped and reported.
//! Everything after parsing is all-or-nothing; the records are written inside a
//! single transaction, so a failure leaves the table exactly as it was.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use super::sqlite_store::SqliteStore;
use super::store::DataAccessError;
use crate::model::{parse_reader, SkippedLine};

/// Failure that aborts an import.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("import aborted, nothing was committed")]
    Store(#[from] DataAccessError),
}

/// Outcome of a successful import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub lines_read: usize,
    /// Lines that parsed into records
    pub parsed: usize,
    /// Records newly written (duplicates of an existing ID1 are not counted)
    pub inserted: usize,
    pub skipped: Vec<SkippedLine>,
}

impl ImportReport {
    /// Parsed records that were dropped because their ID1 already existed.
    pub fn ignored(&self) -> usize {
        self.parsed.saturating_sub(self.inserted)
    }
}

impl std::fmt::Display for ImportReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Read {} lines: {} records parsed, {} inserted, {} already present, {} lines skipped",
            self.lines_read,
            self.parsed,
            self.inserted,
            self.ignored(),
            self.skipped.len()
        )
    }
}

/// Import the file at `path` into `store`, creating the table if needed.
///
/// # Errors
///
/// Returns `ImportError::Io` if the file cannot be read and
/// `ImportError::Store` if the schema or the bulk insert fails.
pub fn import_file(
    store: &mut SqliteStore,
    path: &Path,
    delimiter: char,
) -> Result<ImportReport, ImportError> {
    tracing::info!("Importing {:?}", path);
    let file = File::open(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    import_reader(store, BufReader::new(file), delimiter).map_err(|e| match e {
        ImportError::Io { source, .. } => ImportError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}

/// Import records from any buffered reader.
///
/// # Errors
///
/// See [`import_file`]. I/O errors from a bare reader carry an empty path.
pub fn import_reader<R: BufRead>(
    store: &mut SqliteStore,
    reader: R,
    delimiter: char,
) -> Result<ImportReport, ImportError> {
    store.ensure_schema()?;

    let parsed = parse_reader(reader, delimiter).map_err(|source| ImportError::Io {
        path: PathBuf::new(),
        source,
    })?;

    let inserted = store.insert_all(&parsed.records)?;

    let report = ImportReport {
        lines_read: parsed.lines_read,
        parsed: parsed.records.len(),
        inserted,
        skipped: parsed.skipped,
    };
    tracing::info!("{}", report);
    Ok(report)
}
