//! New-task input box rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Insert a block cursor into `text` at character index `cursor`.
#[must_use]
pub fn with_cursor(text: &str, cursor: usize) -> String {
    let mut display_text = text.to_string();
    match display_text.char_indices().nth(cursor) {
        Some((at, _)) => display_text.insert(at, '█'),
        None => display_text.push('█'),
    }
    display_text
}

/// Render the input box.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Input && app.dialog.is_none();

    let input_line = if app.input.is_empty() && !is_focused {
        Line::from(Span::styled(app.input_placeholder.as_str(), theme::dimmed()))
    } else if is_focused {
        Line::from(Span::styled(
            with_cursor(&app.input, app.cursor_position),
            theme::normal(),
        ))
    } else {
        Line::from(Span::styled(app.input.as_str(), theme::normal()))
    };

    let block = Block::default()
        .title("New task")
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    let paragraph = Paragraph::new(input_line).block(block);

    frame.render_widget(paragraph, area);
}
