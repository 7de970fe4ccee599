//! Layout components (header, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen regions of the scanning station
pub struct Areas {
    pub header: Rect,
    pub fields: Rect,
    pub items: Rect,
    pub status: Rect,
}

/// Split the screen into header, input fields, item list and status bar
pub fn create_layout(area: Rect) -> Areas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Input fields
            Constraint::Min(0),    // Manifest items
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    Areas {
        header: chunks[0],
        fields: chunks[1],
        items: chunks[2],
        status: chunks[3],
    }
}

pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let count = app.form.items().len();
    let line = Line::from(vec![
        Span::styled(
            " Shipment Manifest ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{count} package{}", if count == 1 { "" } else { "s" }),
            Style::default().fg(Color::Gray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    // Lookup status
    if app.awaiting_lookup() {
        spans.push(Span::styled(
            format!(" ◌ searching ({}) ", app.pending_lookups),
            Style::default().fg(Color::Yellow),
        ));
    } else {
        spans.push(Span::styled(" ● ", Style::default().fg(Color::Green)));
    }

    spans.push(Span::styled(
        "Tab:next field  Enter:scan  ↑/↓:select  Del:remove  Esc:quit",
        Style::default().fg(Color::Gray),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
