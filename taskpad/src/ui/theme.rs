//! Theme and styling constants for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::White;

/// Secondary foreground color (dimmed text).
pub const FG_SECONDARY: Color = Color::Gray;

/// Highlight color for focused elements.
pub const HIGHLIGHT: Color = Color::Cyan;

/// Completed task color.
pub const DONE: Color = Color::Green;

/// Edit affordance color.
pub const EDIT: Color = Color::Blue;

/// Remove affordance color.
pub const REMOVE: Color = Color::Red;

/// Informational dialog color.
pub const NOTICE: Color = Color::Yellow;

/// Header background color.
pub const HEADER_BG: Color = Color::Rgb(136, 84, 208);

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style (placeholders, metadata).
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Bold text style.
#[must_use]
pub fn bold() -> Style {
    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Highlighted text style (focused panel borders).
#[must_use]
pub fn highlighted() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Selected item style (in lists).
#[must_use]
pub fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Title of a completed task (green, struck through).
#[must_use]
pub fn task_done() -> Style {
    Style::default().fg(DONE).add_modifier(Modifier::CROSSED_OUT)
}

/// Affordance that cannot be used right now.
#[must_use]
pub fn disabled() -> Style {
    Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
}

/// Style for the header bar.
#[must_use]
pub fn header() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(HEADER_BG)
        .add_modifier(Modifier::BOLD)
}

/// Style for the status bar background (dark background with white foreground).
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 50))
}

/// Style for dialog borders.
#[must_use]
pub fn dialog_border(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
