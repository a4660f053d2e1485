//! Paging over the store: the pager state machine, the terminal session,
//! and plain printing of every page

pub mod pager;
pub mod print;
pub mod session;

pub use pager::{Page, Pager, PagerState};
pub use print::{print_all, PrintError};
pub use session::{Session, StartupError};
