//! Manifest form: input fields and item list

use super::field_renderer::draw_field;
use crate::state::{ActiveField, ManifestForm};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

pub fn draw_fields(frame: &mut Frame, area: Rect, form: &ManifestForm) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let fields = [
        (&form.shipping_provider_code, ActiveField::ShippingProvider),
        (&form.channel_id, ActiveField::Channel),
        (&form.scan_barcode, ActiveField::ScanBarcode),
    ];
    for (idx, (field, which)) in fields.into_iter().enumerate() {
        draw_field(frame, chunks[idx], field, form.active_field == which);
    }
}

pub fn draw_items(frame: &mut Frame, area: Rect, form: &ManifestForm) {
    let block = Block::default()
        .title(" Manifest Items ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if form.items().is_empty() {
        let empty = List::new(vec![ListItem::new(Span::styled(
            "No packages yet. Scan a barcode to add one.",
            Style::default().fg(Color::DarkGray),
        ))])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = form
        .items()
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>4}  ", idx + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(item.sales_invoice.clone(), Style::default().fg(Color::White)),
                Span::styled(
                    format!("  {}", item.scanned_at.format("%H:%M:%S")),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    // Keep the selected row in view
    let mut list_state = ListState::default().with_selected(Some(form.selected_item));
    frame.render_stateful_widget(list, area, &mut list_state);
}
