pub mod keybindings;

pub use keybindings::{intent_for_key, Intent};
