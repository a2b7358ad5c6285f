//! Task list rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use taskpad_core::{EditAffordance, RowEditor, Task};

use super::{input, theme};
use crate::app::{App, PanelFocus};

/// Render the task list, one row per task.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = matches!(app.focus, PanelFocus::List | PanelFocus::Row);

    let block = Block::default()
        .title("Tasks")
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    if app.tasks.is_empty() {
        let empty = Paragraph::new(Span::styled("Nothing to do yet.", theme::dimmed())).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = app
        .tasks
        .tasks()
        .iter()
        .map(|task| ListItem::new(row_line(task, app.rows.get(task.id))).style(theme::normal()))
        .collect();

    let highlight = match app.focus {
        PanelFocus::List => theme::selected(),
        PanelFocus::Row => theme::highlighted(),
        PanelFocus::Input => theme::normal(),
    };
    let list = List::new(items).block(block).highlight_style(highlight);

    // Scrolls the viewport so the selected row is always drawn.
    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Build the line for one row: checkbox, title field, edit and remove buttons.
fn row_line<'a>(task: &'a Task, row: Option<&'a RowEditor>) -> Line<'a> {
    let checkbox = if task.done { "[✓]" } else { "[ ]" };
    let title_style = if task.done {
        theme::task_done()
    } else {
        theme::normal()
    };

    let title = match row {
        Some(row) if row.is_editing() => Span::styled(
            input::with_cursor(row.draft(), row.cursor()),
            theme::normal(),
        ),
        Some(row) => Span::styled(row.draft(), title_style),
        None => Span::styled(task.title.as_str(), title_style),
    };

    let affordance = row.map_or(EditAffordance::StartEdit, RowEditor::affordance);
    let edit = match affordance {
        EditAffordance::StartEdit => Span::styled("[e] edit", theme::normal().fg(theme::EDIT)),
        EditAffordance::Cancel => Span::styled("[esc] cancel", theme::dimmed()),
    };
    let remove_style = if row.is_none_or(RowEditor::can_remove) {
        theme::normal().fg(theme::REMOVE)
    } else {
        theme::disabled()
    };

    Line::from(vec![
        Span::styled(checkbox, title_style),
        Span::raw(" "),
        title,
        Span::raw("  "),
        edit,
        Span::styled(" │ ", theme::dimmed()),
        Span::styled("[d] remove", remove_style),
    ])
}
