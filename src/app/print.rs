//! Non-interactive output: every page, one after another

use std::io::{self, Write};

use crate::app::pager::Pager;
use crate::services::store::{DataAccessError, Store};
use crate::view::plain;
use crate::view::TableRenderer;

#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    #[error("failed to load the page at offset {offset}")]
    Fetch {
        offset: usize,
        #[source]
        source: DataAccessError,
    },

    #[error("failed to write the table")]
    Write(#[from] io::Error),
}

/// Start `pager` and write every page to `out`, each under its page label.
///
/// Stops after the last page, or at the first empty page past the start when
/// rows disappeared during the run. Returns the number of records written.
pub fn print_all<S: Store, W: Write>(
    pager: &mut Pager<S>,
    renderer: &TableRenderer,
    out: &mut W,
) -> Result<usize, PrintError> {
    let mut printed = 0;
    let mut page = pager
        .start()
        .map_err(|source| PrintError::Fetch { offset: 0, source })?;

    loop {
        writeln!(out, "{}", pager.page_label())?;
        plain::write_table(out, &renderer.render(&page.records))?;
        printed += page.records.len();
        if pager.is_at_end() {
            break;
        }

        let offset = pager.offset() + pager.page_size();
        page = pager
            .next()
            .map_err(|source| PrintError::Fetch { offset, source })?;
        if page.records.is_empty() {
            break;
        }
        writeln!(out)?;
    }

    tracing::info!("Printed {} records", printed);
    Ok(printed)
}
