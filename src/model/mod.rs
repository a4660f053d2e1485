//! Data model: person records and the flat-file parser

pub mod parser;
pub mod record;

pub use parser::{parse_line, parse_reader, ParseError, ParsedInput, SkippedLine};
pub use record::Record;
