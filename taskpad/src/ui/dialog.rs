//! Modal dialog rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use super::theme;
use crate::app::Dialog;

/// Render `dialog` centered over `area`.
pub fn render(frame: &mut Frame, area: Rect, dialog: &Dialog) {
    let (title, color, lines) = match dialog {
        Dialog::DuplicateTitle { title } => (
            "Task already exists",
            theme::NOTICE,
            vec![
                Line::from(format!("You cannot add another task named \"{title}\".")),
                Line::from(""),
                Line::from(Span::styled("[Enter] Ok", theme::bold())),
            ],
        ),
        Dialog::ConfirmRemoval(pending) => (
            "Remove item",
            theme::REMOVE,
            vec![
                Line::from(format!(
                    "Are you sure you want to remove \"{}\"?",
                    pending.title
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled("[y] Yes", theme::dimmed()),
                    Span::raw("   "),
                    Span::styled("[n/Enter] No", theme::bold()),
                ]),
            ],
        ),
    };

    let popup = centered_rect(60, 7, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme::dialog_border(color));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(theme::normal())
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

/// A rectangle `percent_x` wide and `height` rows tall, centered in `area`.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
