// Session test harness: drives a `Session` against ratatui's TestBackend

use breaches::app::Session;
use breaches::config::ViewConfig;
use breaches::services::{MemoryStore, Store};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Layout rows for a harness of a given height
pub mod layout {
    /// Table block top border (carries the title)
    pub const TITLE_ROW: u16 = 0;
    /// Column header row inside the border
    pub const HEADER_ROW: u16 = 1;
    /// First data row
    pub const FIRST_DATA_ROW: u16 = 2;

    pub fn footer_row(height: u16) -> u16 {
        height - 2
    }

    pub fn help_row(height: u16) -> u16 {
        height - 1
    }
}

/// Virtual terminal around a live session.
pub struct SessionTestHarness<S: Store> {
    session: Session<S>,
    terminal: Terminal<TestBackend>,
    height: u16,
}

impl SessionTestHarness<MemoryStore> {
    /// Session over `count` generated records.
    pub fn with_records(count: usize, page_size: usize) -> anyhow::Result<Self> {
        let config = ViewConfig {
            page_size,
            ..ViewConfig::default()
        };
        Self::new(MemoryStore::with_generated(count), &config, 200, 30)
    }
}

impl<S: Store> SessionTestHarness<S> {
    pub fn new(store: S, config: &ViewConfig, width: u16, height: u16) -> anyhow::Result<Self> {
        let session = Session::start(store, config)?;
        let terminal = Terminal::new(TestBackend::new(width, height))?;
        let mut harness = Self {
            session,
            terminal,
            height,
        };
        harness.render()?;
        Ok(harness)
    }

    /// Send a key press and redraw. Returns false once the session wants to quit.
    pub fn send_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> anyhow::Result<bool> {
        let keep_running = self
            .session
            .handle_key_event(KeyEvent::new(code, modifiers));
        self.render()?;
        Ok(keep_running)
    }

    /// Send the same key `count` times.
    pub fn send_key_repeat(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
        count: usize,
    ) -> anyhow::Result<()> {
        for _ in 0..count {
            self.send_key(code, modifiers)?;
        }
        Ok(())
    }

    pub fn render(&mut self) -> anyhow::Result<()> {
        let session = &self.session;
        self.terminal.draw(|frame| session.draw_frame(frame))?;
        Ok(())
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    /// One screen row, trailing spaces trimmed.
    pub fn screen_row(&self, row: u16) -> String {
        let buffer = self.terminal.backend().buffer();
        let line: String = (0..buffer.area.width)
            .filter_map(|x| buffer.cell((x, row)))
            .map(|cell| cell.symbol())
            .collect();
        line.trim_end().to_string()
    }

    /// The whole screen, one line per row.
    pub fn screen_to_string(&self) -> String {
        (0..self.height)
            .map(|row| self.screen_row(row))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn footer(&self) -> String {
        self.screen_row(layout::footer_row(self.height))
    }

    pub fn help(&self) -> String {
        self.screen_row(layout::help_row(self.height))
    }

    /// Number of rows between the header and the bottom border that hold data.
    pub fn visible_data_rows(&self) -> usize {
        let bottom_border = layout::footer_row(self.height) - 1;
        (layout::FIRST_DATA_ROW..bottom_border)
            .filter(|row| {
                let line = self.screen_row(*row);
                line.trim_matches(|c: char| c == '│' || c.is_whitespace())
                    .chars()
                    .next()
                    .is_some()
            })
            .count()
    }

    pub fn assert_screen_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            screen.contains(text),
            "Expected screen to contain {:?}\nScreen:\n{}",
            text,
            screen
        );
    }

    pub fn assert_screen_not_contains(&self, text: &str) {
        let screen = self.screen_to_string();
        assert!(
            !screen.contains(text),
            "Expected screen not to contain {:?}\nScreen:\n{}",
            text,
            screen
        );
    }
}
