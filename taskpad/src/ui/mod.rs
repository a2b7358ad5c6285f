//! Terminal UI rendering.

pub mod dialog;
pub mod header;
pub mod input;
pub mod status_bar;
pub mod task_list;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::App;

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Input
            Constraint::Min(3),    // Tasks
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    header::render(frame, chunks[0], app);
    input::render(frame, chunks[1], app);
    task_list::render(frame, chunks[2], app);
    status_bar::render(frame, chunks[3], app);

    if let Some(dialog) = &app.dialog {
        dialog::render(frame, frame.area(), dialog);
    }
}
