//! Offset/limit navigation over a `Store`
//!
//! The pager is the only place that knows the current offset. Every
//! transition performs exactly one `Store::query` and commits the new offset
//! only after that query succeeds, so a failed fetch leaves the pager where it
//! was. Pages are never cached: the caller always gets the latest store read.

use crate::model::Record;
use crate::services::store::{DataAccessError, Store};

/// One page returned by a pager transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub offset: usize,
    pub records: Vec<Record>,
}

/// Coarse position of the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagerState {
    AtStart,
    Mid,
    AtEnd,
}

pub struct Pager<S: Store> {
    store: S,
    offset: usize,
    page_size: usize,
    /// Row count read by `start`; display only
    total: Option<usize>,
    /// Set once a fetch past the data returned no rows
    exhausted: bool,
}

impl<S: Store> Pager<S> {
    /// Create a pager at offset 0. A `page_size` of 0 is treated as 1.
    pub fn new(store: S, page_size: usize) -> Self {
        Self {
            store,
            offset: 0,
            page_size: page_size.max(1),
            total: None,
            exhausted: false,
        }
    }

    /// Read the row count, then fetch the first page.
    ///
    /// A failing count only leaves the total unknown. A failing first fetch is
    /// returned to the caller.
    pub fn start(&mut self) -> Result<Page, DataAccessError> {
        self.total = match self.store.count() {
            Ok(total) => Some(total),
            Err(e) => {
                tracing::warn!("Could not count records, page total unknown: {}", e.with_cause());
                None
            }
        };
        self.offset = 0;
        self.exhausted = false;
        self.fetch(0)
    }

    /// Advance one page, or re-read the current page when already at the end.
    pub fn next(&mut self) -> Result<Page, DataAccessError> {
        if self.is_at_end() {
            tracing::debug!("Already on the last page (offset {})", self.offset);
            return self.fetch(self.offset);
        }

        let target = self.offset + self.page_size;
        let page = self.fetch(target)?;
        if page.records.is_empty() {
            self.exhausted = true;
        }
        self.offset = target;
        Ok(page)
    }

    /// Go back one page, or re-read the first page when already at offset 0.
    pub fn prev(&mut self) -> Result<Page, DataAccessError> {
        let target = self.offset.saturating_sub(self.page_size);
        let page = self.fetch(target)?;
        if target != self.offset {
            self.offset = target;
            self.exhausted = false;
        }
        Ok(page)
    }

    fn fetch(&self, offset: usize) -> Result<Page, DataAccessError> {
        let records = self.store.query(offset, self.page_size)?;
        tracing::debug!("Fetched {} records at offset {}", records.len(), offset);
        Ok(Page { offset, records })
    }

    /// True when `next` would not advance.
    pub fn is_at_end(&self) -> bool {
        if self.exhausted {
            return true;
        }
        match self.total {
            Some(total) => self.offset + self.page_size >= total,
            None => false,
        }
    }

    /// Coarse position. `AtEnd` whenever `next` would not advance, even at
    /// offset 0 (an empty store, or one that fits on a single page).
    pub fn state(&self) -> PagerState {
        if self.is_at_end() {
            PagerState::AtEnd
        } else if self.offset == 0 {
            PagerState::AtStart
        } else {
            PagerState::Mid
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total(&self) -> Option<usize> {
        self.total
    }

    /// 1-based page number of the current offset.
    pub fn current_page(&self) -> usize {
        self.offset / self.page_size + 1
    }

    /// Number of pages, at least 1, when the total is known.
    pub fn total_pages(&self) -> Option<usize> {
        self.total
            .map(|total| total.div_ceil(self.page_size).max(1))
    }

    /// `"Page x/y"`, or `"Page x"` when the total is unknown.
    pub fn page_label(&self) -> String {
        match self.total_pages() {
            Some(pages) => format!("Page {}/{}", self.current_page(), pages),
            None => format!("Page {}", self.current_page()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
