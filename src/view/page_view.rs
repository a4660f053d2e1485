//! Terminal rendering of one page: bordered table, footer, key help

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};
use ratatui::Frame;

use crate::input::keybindings::HELP_TEXT;
use crate::view::table::TableView;

/// Footer content: the page label plus an optional error message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub page_label: String,
    pub error: Option<String>,
}

impl Footer {
    pub fn new(page_label: String) -> Self {
        Self {
            page_label,
            error: None,
        }
    }

    /// The footer as plain text.
    pub fn text(&self) -> String {
        match &self.error {
            Some(error) => format!("{}  Error: {}", self.page_label, error),
            None => self.page_label.clone(),
        }
    }
}

/// Screen regions of the page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub table: Rect,
    pub footer: Rect,
    pub help: Rect,
}

impl PageLayout {
    pub fn split(area: Rect) -> Self {
        let [table, footer, help] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        Self {
            table,
            footer,
            help,
        }
    }
}

/// Draw the whole page view into `area`.
pub fn render_page(frame: &mut Frame, area: Rect, view: &TableView, title: &str, footer: &Footer) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let layout = PageLayout::split(area);

    render_table(frame, layout.table, view, title);
    render_footer(frame, layout.footer, footer);
    frame.render_widget(
        Paragraph::new(HELP_TEXT).style(Style::default().fg(Color::DarkGray)),
        layout.help,
    );
}

fn render_table(frame: &mut Frame, area: Rect, view: &TableView, title: &str) {
    let widths = view
        .column_widths()
        .map(|width| Constraint::Length(u16::try_from(width).unwrap_or(u16::MAX)));

    let header = Row::new(view.header).style(Style::default().add_modifier(Modifier::BOLD));
    let rows = view.rows.iter().map(|row| Row::new(row.clone()));

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string()),
        );

    frame.render_widget(table, area);
}

fn render_footer(frame: &mut Frame, area: Rect, footer: &Footer) {
    let mut spans = vec![Span::raw(footer.page_label.clone())];
    if let Some(error) = &footer.error {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("Error: {error}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
