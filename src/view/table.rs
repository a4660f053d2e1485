//! Table rendering: records in, display cells out
//!
//! `TableRenderer` is a pure mapping from a page of records to a `TableView`
//! (a header plus one row of cells per record). It holds only the truncation
//! limits it was built with, so the same page always renders the same way.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::config::ViewConfig;
use crate::model::record::{Record, FIELD_COUNT};

/// Table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id1,
    Id2,
    FirstName,
    LastName,
    Gender,
    BirthPlace,
    CurrentPlace,
    Job,
    Date,
}

impl Column {
    pub const ALL: [Column; FIELD_COUNT] = [
        Column::Id1,
        Column::Id2,
        Column::FirstName,
        Column::LastName,
        Column::Gender,
        Column::BirthPlace,
        Column::CurrentPlace,
        Column::Job,
        Column::Date,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Id1 => "ID1",
            Column::Id2 => "ID2",
            Column::FirstName => "First Name",
            Column::LastName => "Last Name",
            Column::Gender => "Gender",
            Column::BirthPlace => "Birth Place",
            Column::CurrentPlace => "Current Place",
            Column::Job => "Job",
            Column::Date => "Date",
        }
    }
}

/// Cut `text` to at most `max_len` grapheme clusters.
///
/// The cut is silent (no ellipsis) and always lands on a character boundary.
pub fn truncate(text: &str, max_len: usize) -> &str {
    match text.grapheme_indices(true).nth(max_len) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// A rendered page: header plus cell rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub header: [&'static str; FIELD_COUNT],
    pub rows: Vec<[String; FIELD_COUNT]>,
}

impl TableView {
    /// Header only, no rows.
    pub fn empty() -> Self {
        Self {
            header: Column::ALL.map(Column::header),
            rows: Vec::new(),
        }
    }

    /// Display width of each column: the widest of the header and every cell.
    pub fn column_widths(&self) -> [usize; FIELD_COUNT] {
        let mut widths = self.header.map(UnicodeWidthStr::width);
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.width());
            }
        }
        widths
    }
}

/// Maps records to cells, applying optional per-column truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRenderer {
    limits: Option<[usize; FIELD_COUNT]>,
}

impl TableRenderer {
    pub fn new(limits: Option<[usize; FIELD_COUNT]>) -> Self {
        Self { limits }
    }

    pub fn from_config(config: &ViewConfig) -> Self {
        Self::new(
            config
                .truncate
                .then(|| config.column_widths.as_array()),
        )
    }

    /// Render cells exactly as stored.
    pub fn untruncated() -> Self {
        Self::new(None)
    }

    pub fn render(&self, records: &[Record]) -> TableView {
        TableView {
            header: Column::ALL.map(Column::header),
            rows: records.iter().map(|record| self.render_row(record)).collect(),
        }
    }

    fn render_row(&self, record: &Record) -> [String; FIELD_COUNT] {
        let fields = record.fields();
        std::array::from_fn(|index| match &self.limits {
            Some(limits) => truncate(fields[index], limits[index]).to_string(),
            None => fields[index].to_string(),
        })
    }
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::from_config(&ViewConfig::default())
    }
}
