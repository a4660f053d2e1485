use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::model::record::FIELD_COUNT;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// SQLite database file
    #[serde(default = "default_database")]
    pub database: PathBuf,

    /// Flat file read by `import`
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Field separator of the flat file
    #[serde(default = "default_delimiter")]
    pub delimiter: char,

    #[serde(default)]
    pub view: ViewConfig,
}

fn default_database() -> PathBuf {
    PathBuf::from("canada.db")
}

fn default_data_file() -> PathBuf {
    PathBuf::from("data/Canada.txt")
}

fn default_delimiter() -> char {
    ':'
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            data_file: default_data_file(),
            delimiter: default_delimiter(),
            view: ViewConfig::default(),
        }
    }
}

/// Table view configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Records per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Cut cells to `column_widths`; when false cells are shown whole
    #[serde(default = "default_true")]
    pub truncate: bool,

    #[serde(default)]
    pub column_widths: ColumnWidths,
}

fn default_page_size() -> usize {
    20
}

fn default_true() -> bool {
    true
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            truncate: true,
            column_widths: ColumnWidths::default(),
        }
    }
}

/// Maximum cell length per column, counted in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnWidths {
    pub id1: usize,
    pub id2: usize,
    pub first_name: usize,
    pub last_name: usize,
    pub gender: usize,
    pub birth_place: usize,
    pub current_place: usize,
    pub job: usize,
    pub date: usize,
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self {
            id1: 20,
            id2: 20,
            first_name: 20,
            last_name: 20,
            gender: 10,
            birth_place: 25,
            current_place: 25,
            job: 20,
            date: 16,
        }
    }
}

impl ColumnWidths {
    /// Widths in column order
    pub fn as_array(&self) -> [usize; FIELD_COUNT] {
        [
            self.id1,
            self.id2,
            self.first_name,
            self.last_name,
            self.gender,
            self.birth_place,
            self.current_place,
            self.job,
            self.date,
        ]
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("{}: {}", path.display(), e)))?;

        let config: Config = serde_json::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.view.page_size == 0 {
            return Err(ConfigError::ValidationError(
                "page_size must be greater than 0".to_string(),
            ));
        }

        if self.view.column_widths.as_array().contains(&0) {
            return Err(ConfigError::ValidationError(
                "column widths must be greater than 0".to_string(),
            ));
        }

        if matches!(self.delimiter, '\n' | '\r') {
            return Err(ConfigError::ValidationError(
                "delimiter cannot be a line break".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}
