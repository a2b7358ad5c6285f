//! Header bar with the title and task counter.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::App;

/// Counter text for `count` tasks.
#[must_use]
pub fn counter_label(count: usize) -> String {
    if count == 1 {
        "1 task".to_string()
    } else {
        format!("{count} tasks")
    }
}

/// Render the header.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::raw(" "),
        Span::raw(app.title.as_str()),
        Span::raw("  |  "),
        Span::raw(counter_label(app.tasks.len())),
    ];
    let done = app.tasks.completed_count();
    if done > 0 {
        spans.push(Span::raw(format!(", {done} done")));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Left)
        .style(theme::header())
        .block(Block::default().borders(Borders::NONE));

    frame.render_widget(paragraph, area);
}
