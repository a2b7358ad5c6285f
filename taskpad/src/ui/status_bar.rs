//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, Dialog, PanelFocus};

/// Key help for the current focus and dialog.
#[must_use]
pub fn help_text(app: &App) -> &'static str {
    match (&app.dialog, app.focus) {
        (Some(Dialog::DuplicateTitle { .. }), _) => "Enter: ok",
        (Some(Dialog::ConfirmRemoval(_)), _) => "y: remove | n/Enter/Esc: keep",
        (None, PanelFocus::Input) => "Enter: add | Tab: switch panel | Esc: quit | ←→: move cursor",
        (None, PanelFocus::List) => {
            "↑↓/jk: navigate | Space: toggle done | e: edit | d: remove | Tab: switch panel | Esc: quit"
        }
        (None, PanelFocus::Row) => "Enter: save | Esc: cancel | ←→: move cursor",
    }
}

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let status_line = Line::from(vec![
        Span::styled(concat!("Taskpad v", env!("CARGO_PKG_VERSION")), theme::bold()),
        Span::raw(" | "),
        Span::styled(help_text(app), theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
