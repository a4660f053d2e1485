// Test data fixtures

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary directory holding an input file and a database path.
pub struct DataFixture {
    _temp_dir: TempDir,
    pub data_file: PathBuf,
    pub database: PathBuf,
}

impl DataFixture {
    /// Create a data file with the given content. The database is not created.
    pub fn new(content: &str) -> anyhow::Result<Self> {
        let temp_dir = tempfile::tempdir()?;
        let data_file = temp_dir.path().join("Canada.txt");
        let database = temp_dir.path().join("canada.db");

        let mut file = fs::File::create(&data_file)?;
        file.write_all(content.as_bytes())?;
        file.flush()?;

        Ok(DataFixture {
            _temp_dir: temp_dir,
            data_file,
            database,
        })
    }

    /// Data file with `count` well-formed lines, see [`person_line`].
    pub fn with_people(count: usize) -> anyhow::Result<Self> {
        Self::new(&people_lines(count))
    }
}

/// One well-formed 10-field line. Field 7 is a throwaway code that import drops.
pub fn person_line(index: usize) -> String {
    format!(
        "{index}:{}:First{index}:Last{index}:{}:Birthplace{index}:Town{index}:code{index}:Job{index}:2020-01-{:02}",
        index + 1000,
        if index % 2 == 0 { "M" } else { "F" },
        index % 28 + 1,
    )
}

/// `count` lines produced by [`person_line`], newline-terminated.
pub fn people_lines(count: usize) -> String {
    (0..count).map(|i| person_line(i) + "\n").collect()
}
