//! Plain-text table output for non-interactive printing

use std::io::{self, Write};

use unicode_width::UnicodeWidthStr;

use crate::model::record::FIELD_COUNT;
use crate::view::table::TableView;

/// Write `view` as space-aligned columns with a dashed rule under the header.
pub fn write_table<W: Write>(out: &mut W, view: &TableView) -> io::Result<()> {
    let widths = view.column_widths();

    write_row(out, &view.header, &widths)?;
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    write_row(out, &rule, &widths)?;
    for row in &view.rows {
        write_row(out, row, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write, C: AsRef<str>>(
    out: &mut W,
    cells: &[C],
    widths: &[usize; FIELD_COUNT],
) -> io::Result<()> {
    let mut line = String::new();
    for (index, (cell, width)) in cells.iter().zip(widths).enumerate() {
        let cell = cell.as_ref();
        if index > 0 {
            line.push(' ');
        }
        line.push_str(cell);
        // `{:width$}` pads by char count, which is wrong for wide characters
        line.extend(std::iter::repeat(' ').take(width.saturating_sub(cell.width())));
    }
    writeln!(out, "{}", line.trim_end())
}
