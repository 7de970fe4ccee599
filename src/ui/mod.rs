//! UI module for rendering the TUI

mod field_renderer;
mod layout;
mod manifest;
mod redraw;
mod toasts;

pub use redraw::Redraw;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = layout::create_layout(frame.area());

    layout::draw_header(frame, areas.header, app);
    manifest::draw_fields(frame, areas.fields, &app.form);
    manifest::draw_items(frame, areas.items, &app.form);
    toasts::draw(frame, areas.items, &app.toasts);

    // Draw status bar
    layout::draw_status_bar(frame, areas.status, app);
}
