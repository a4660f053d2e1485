//! View layer
//!
//! Table rendering (pure), the terminal page view, and plain-text output.

pub mod page_view;
pub mod plain;
pub mod table;

pub use table::{truncate, Column, TableRenderer, TableView};
