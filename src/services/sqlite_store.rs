//! SQLite-backed record store
//!
//! Records live in a single `people` table with one TEXT column per field and
//! `ID1` as the natural key. Pages are read in `rowid` order, which is insertion
//! order for this table and stays stable for the life of a session.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

use super::store::{DataAccessError, Store};
use crate::model::record::{Record, FIELD_COUNT};

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS people (
    ID1 TEXT PRIMARY KEY,
    ID2 TEXT,
    FirstName TEXT,
    LastName TEXT,
    Gender TEXT,
    BirthPlace TEXT,
    CurrentPlace TEXT,
    Job TEXT,
    Date TEXT
)";

const INSERT_SQL: &str = "INSERT OR IGNORE INTO people
    (ID1, ID2, FirstName, LastName, Gender, BirthPlace, CurrentPlace, Job, Date)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";

const SELECT_PAGE_SQL: &str = "SELECT ID1, ID2, FirstName, LastName, Gender, BirthPlace, CurrentPlace, Job, Date
    FROM people ORDER BY rowid LIMIT ?1 OFFSET ?2";

const COUNT_SQL: &str = "SELECT COUNT(*) FROM people";

/// Record store on top of a single SQLite connection.
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (creating if necessary) a database for reading and writing.
    ///
    /// # Errors
    ///
    /// Returns `DataAccessError` if the file cannot be opened or created.
    pub fn open(path: &Path) -> Result<Self, DataAccessError> {
        let conn = Connection::open(path).map_err(DataAccessError::database("open database"))?;
        tracing::debug!("Opened database {:?}", path);
        Ok(Self { conn })
    }

    /// Open an existing database read-only.
    ///
    /// Unlike [`SqliteStore::open`] this never creates a file, so a mistyped path
    /// is reported instead of silently producing an empty database.
    ///
    /// # Errors
    ///
    /// Returns `DataAccessError` if the file does not exist or cannot be opened.
    pub fn open_existing(path: &Path) -> Result<Self, DataAccessError> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags)
            .map_err(DataAccessError::database("open database"))?;
        tracing::debug!("Opened database {:?} read-only", path);
        Ok(Self { conn })
    }

    /// Private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns `DataAccessError` if SQLite cannot allocate the database.
    pub fn open_in_memory() -> Result<Self, DataAccessError> {
        let conn = Connection::open_in_memory()
            .map_err(DataAccessError::database("open in-memory database"))?;
        Ok(Self { conn })
    }

    /// Create the `people` table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `DataAccessError` if the statement fails (e.g. read-only database).
    pub fn ensure_schema(&self) -> Result<(), DataAccessError> {
        self.conn
            .execute(CREATE_TABLE_SQL, [])
            .map_err(DataAccessError::database("create people table"))?;
        Ok(())
    }

    /// Insert all records inside one transaction.
    ///
    /// Records whose `ID1` already exists are ignored. Either every insert
    /// commits or, on the first failure, none do.
    ///
    /// Returns the number of rows actually inserted.
    ///
    /// # Errors
    ///
    /// Returns `DataAccessError` if the transaction or any statement fails; the
    /// transaction is rolled back when it is dropped uncommitted.
    pub fn insert_all(&mut self, records: &[Record]) -> Result<usize, DataAccessError> {
        let tx = self
            .conn
            .transaction()
            .map_err(DataAccessError::database("begin import transaction"))?;

        let mut inserted = 0;
        {
            let mut stmt = tx
                .prepare(INSERT_SQL)
                .map_err(DataAccessError::database("prepare insert statement"))?;
            for record in records {
                inserted += stmt
                    .execute(record.fields())
                    .map_err(DataAccessError::database("insert record"))?;
            }
        }

        tx.commit()
            .map_err(DataAccessError::database("commit import transaction"))?;

        tracing::info!(
            "Inserted {} of {} records ({} already present)",
            inserted,
            records.len(),
            records.len() - inserted
        );
        Ok(inserted)
    }
}

impl Store for SqliteStore {
    fn query(&self, offset: usize, limit: usize) -> Result<Vec<Record>, DataAccessError> {
        let mut stmt = self
            .conn
            .prepare_cached(SELECT_PAGE_SQL)
            .map_err(DataAccessError::database("prepare page query"))?;

        let rows = stmt
            .query_map([to_sql_int(limit), to_sql_int(offset)], decode_row)
            .map_err(DataAccessError::database("query page"))?;

        rows.collect::<Result<Vec<_>, _>>()
            .map_err(DataAccessError::database("decode page row"))
    }

    fn count(&self) -> Result<usize, DataAccessError> {
        let count: i64 = self
            .conn
            .query_row(COUNT_SQL, [], |row| row.get(0))
            .map_err(DataAccessError::database("count records"))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}

/// Row decoder for the page query. `NULL` columns decode as empty strings.
fn decode_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Record> {
    let mut fields: [String; FIELD_COUNT] = Default::default();
    for (index, field) in fields.iter_mut().enumerate() {
        *field = row.get::<_, Option<String>>(index)?.unwrap_or_default();
    }
    Ok(Record::from_fields(fields))
}

fn to_sql_int(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}
