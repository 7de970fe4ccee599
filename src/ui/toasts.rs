//! Notification toasts, stacked in the top-right corner of an area

use crate::state::{Severity, ToastQueue};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TOAST_WIDTH: u16 = 46;
const TOAST_HEIGHT: u16 = 3;

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Info => Color::Green,
        Severity::Warning => Color::Yellow,
        Severity::Error => Color::Red,
    }
}

pub fn draw(frame: &mut Frame, area: Rect, toasts: &ToastQueue) {
    let width = TOAST_WIDTH.min(area.width);
    let x = area.x + area.width.saturating_sub(width + 1);

    for (idx, toast) in toasts.iter().enumerate() {
        let y = area.y + 1 + idx as u16 * TOAST_HEIGHT;
        if y + TOAST_HEIGHT > area.y + area.height {
            break;
        }
        let toast_area = Rect {
            x,
            y,
            width,
            height: TOAST_HEIGHT,
        };
        let color = severity_color(toast.severity);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));

        frame.render_widget(Clear, toast_area);
        frame.render_widget(
            Paragraph::new(toast.message.as_str())
                .style(Style::default().fg(color))
                .block(block),
            toast_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_colors() {
        assert_eq!(severity_color(Severity::Error), Color::Red);
        assert_eq!(severity_color(Severity::Warning), Color::Yellow);
        assert_eq!(severity_color(Severity::Info), Color::Green);
    }
}
