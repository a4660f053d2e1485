//! Flat-file line parser
//!
//! Each line of the dataset holds one person, fields separated by a single
//! delimiter character. At least ten fields are required. Field 7 is not part of
//! the record, so positions 0-6 and 8-9 map onto the nine record fields and
//! anything past position 9 is ignored.

use std::borrow::Cow;
use std::io::BufRead;

use super::record::{Record, FIELD_COUNT};

/// Minimum number of delimited fields a line must have.
pub const MIN_FIELDS: usize = 10;

/// Source positions of the record fields, in record order.
const FIELD_POSITIONS: [usize; FIELD_COUNT] = [0, 1, 2, 3, 4, 5, 6, 8, 9];

/// A line that could not be turned into a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected at least {expected} fields, found {found}", expected = MIN_FIELDS)]
    TooFewFields { found: usize },
}

/// Parse one line into a record.
pub fn parse_line(line: &str, delimiter: char) -> Result<Record, ParseError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let parts: Vec<&str> = line.split(delimiter).collect();
    if parts.len() < MIN_FIELDS {
        return Err(ParseError::TooFewFields { found: parts.len() });
    }

    Ok(Record::from_fields(
        FIELD_POSITIONS.map(|pos| parts[pos].to_string()),
    ))
}

/// A malformed line, kept for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the input
    pub line_number: usize,
    pub error: ParseError,
}

impl std::fmt::Display for SkippedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: {}", self.line_number, self.error)
    }
}

/// Result of parsing a whole input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInput {
    pub records: Vec<Record>,
    pub skipped: Vec<SkippedLine>,
    pub lines_read: usize,
}

/// Parse every line of `reader`.
///
/// Malformed lines are skipped and reported; only a read failure aborts.
/// Bytes that are not valid UTF-8 (Latin-1 dumps, mostly) are replaced with
/// U+FFFD and the line is parsed as usual.
pub fn parse_reader<R: BufRead>(reader: R, delimiter: char) -> std::io::Result<ParsedInput> {
    let mut parsed = ParsedInput::default();

    for (index, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let line_number = index + 1;
        parsed.lines_read = line_number;

        let line = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = line {
            tracing::warn!("Line {} is not valid UTF-8, replacing bad bytes", line_number);
        }

        match parse_line(&line, delimiter) {
            Ok(record) => parsed.records.push(record),
            Err(error) => {
                tracing::warn!("Skipping line {}: {}", line_number, error);
                parsed.skipped.push(SkippedLine { line_number, error });
            }
        }
    }

    tracing::debug!(
        "Parsed {} records from {} lines ({} skipped)",
        parsed.records.len(),
        parsed.lines_read,
        parsed.skipped.len()
    );
    Ok(parsed)
}
