use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the session to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Next,
    Previous,
    Quit,
}

/// Map a key press to an intent. Unbound keys map to `None`.
pub fn intent_for_key(key_event: KeyEvent) -> Option<Intent> {
    match key_event {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => Some(Intent::Quit),

        KeyEvent {
            code: KeyCode::Esc | KeyCode::Char('q'),
            ..
        } => Some(Intent::Quit),

        KeyEvent {
            code: KeyCode::Char('n') | KeyCode::Right | KeyCode::PageDown,
            modifiers: KeyModifiers::NONE,
            ..
        } => Some(Intent::Next),

        KeyEvent {
            code: KeyCode::Char('p') | KeyCode::Left | KeyCode::PageUp,
            modifiers: KeyModifiers::NONE,
            ..
        } => Some(Intent::Previous),

        _ => None,
    }
}

/// Key help shown under the table.
pub const HELP_TEXT: &str = "n/→/PgDn next  p/←/PgUp previous  q/Esc quit";
