//! Interactive paging session
//!
//! `Session` binds a `Pager` to the terminal: it owns the table view value
//! and the footer, turns key presses into pager transitions, and redraws after
//! every event. A failed fetch only changes the footer; the page on screen
//! stays as it was and the loop keeps running.

use std::io;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::backend::Backend;
use ratatui::{Frame, Terminal};

use crate::app::pager::{Page, Pager};
use crate::config::ViewConfig;
use crate::input::keybindings::{intent_for_key, Intent};
use crate::services::store::{DataAccessError, Store};
use crate::view::page_view::{render_page, Footer};
use crate::view::table::{TableRenderer, TableView};

/// The session could not be started; nothing was drawn.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("cannot open the record store")]
    OpenStore(#[source] DataAccessError),

    #[error("cannot load the first page")]
    InitialPage(#[source] DataAccessError),
}

pub struct Session<S: Store> {
    pager: Pager<S>,
    renderer: TableRenderer,
    view: TableView,
    footer: Footer,
    should_quit: bool,
}

impl<S: Store> Session<S> {
    /// Fetch the first page from `store` and build the initial view.
    pub fn start(store: S, config: &ViewConfig) -> Result<Self, StartupError> {
        let mut pager = Pager::new(store, config.page_size);
        let page = pager.start().map_err(StartupError::InitialPage)?;
        let renderer = TableRenderer::from_config(config);

        tracing::info!(
            "Session started: {} records, {} per page",
            pager
                .total()
                .map_or_else(|| "unknown".to_string(), |t| t.to_string()),
            pager.page_size()
        );

        Ok(Self {
            view: renderer.render(&page.records),
            footer: Footer::new(pager.page_label()),
            renderer,
            pager,
            should_quit: false,
        })
    }

    /// Draw, wait for input, repeat until a quit intent.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|frame| self.draw_frame(frame))?;

            let event = event::read()?;
            if !self.handle_event(event) {
                break Ok(());
            }
        }
    }

    /// Returns false once the session should end.
    pub fn handle_event(&mut self, event: Event) -> bool {
        if let Event::Key(key_event) = event {
            // Windows reports releases too
            if key_event.kind == KeyEventKind::Press {
                return self.handle_key_event(key_event);
            }
        }
        !self.should_quit
    }

    /// Returns false once the session should end.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        if let Some(intent) = intent_for_key(key_event) {
            self.handle_intent(intent);
        }
        !self.should_quit
    }

    pub fn handle_intent(&mut self, intent: Intent) {
        let result = match intent {
            Intent::Next => self.pager.next(),
            Intent::Previous => self.pager.prev(),
            Intent::Quit => {
                tracing::debug!("Quit requested at offset {}", self.pager.offset());
                self.should_quit = true;
                return;
            }
        };
        self.apply(intent, result);
    }

    fn apply(&mut self, intent: Intent, result: Result<Page, DataAccessError>) {
        match result {
            Ok(page) => {
                self.view = self.renderer.render(&page.records);
                self.footer = Footer::new(self.pager.page_label());
            }
            Err(e) => {
                let message = e.with_cause();
                tracing::error!("{:?} failed at offset {}: {}", intent, self.pager.offset(), message);
                self.footer.page_label = self.pager.page_label();
                self.footer.error = Some(message);
            }
        }
    }

    pub fn draw_frame(&self, frame: &mut Frame) {
        let area = frame.area();
        render_page(frame, area, &self.view, &self.title(), &self.footer);
    }

    fn title(&self) -> String {
        match self.pager.total() {
            Some(1) => " 1 record ".to_string(),
            Some(total) => format!(" {total} records "),
            None => " Records ".to_string(),
        }
    }

    pub fn pager(&self) -> &Pager<S> {
        &self.pager
    }

    pub fn view(&self) -> &TableView {
        &self.view
    }

    pub fn footer(&self) -> &Footer {
        &self.footer
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
