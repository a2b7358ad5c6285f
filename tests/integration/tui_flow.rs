//! End-to-end TUI tests: synthetic key events into `App`, frames rendered
//! into ratatui's `TestBackend`.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use taskpad::app::{App, Dialog, PanelFocus};
use taskpad::ui;
use taskpad_core::{IdStrategy, TaskId};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn make_app() -> App {
    App::new(IdStrategy::Sequential)
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn add_task(app: &mut App, title: &str) {
    type_str(app, title);
    press(app, KeyCode::Enter);
}

/// Render one frame and return the screen as text, one line per row.
fn render(app: &App) -> String {
    let backend = TestBackend::new(100, 20);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| ui::draw(frame, app)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = usize::from(buffer.area.width);
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

// ===========================================================================
// Scenarios
// ===========================================================================

#[test]
fn add_then_duplicate_shows_notice() {
    let mut app = make_app();
    add_task(&mut app, "Buy milk");
    let screen = render(&app);
    assert!(screen.contains("[ ] Buy milk"));
    assert!(screen.contains("1 task"));

    add_task(&mut app, "Buy milk");
    assert_eq!(app.tasks.len(), 1);
    let screen = render(&app);
    assert!(screen.contains("Task already exists"));

    press(&mut app, KeyCode::Enter);
    assert!(app.dialog.is_none());
    assert!(!render(&app).contains("Task already exists"));
}

#[test]
fn toggle_checks_and_unchecks_row() {
    let mut app = make_app();
    add_task(&mut app, "A");
    press(&mut app, KeyCode::Tab);

    press(&mut app, KeyCode::Char(' '));
    assert!(app.tasks.get(TaskId::from_raw(1)).unwrap().done);
    let screen = render(&app);
    assert!(screen.contains("[✓] A"));
    assert!(screen.contains("1 done"));

    press(&mut app, KeyCode::Char(' '));
    assert!(!app.tasks.get(TaskId::from_raw(1)).unwrap().done);
    assert!(render(&app).contains("[ ] A"));
}

#[test]
fn edit_cancel_then_submit() {
    let mut app = make_app();
    add_task(&mut app, "A");
    add_task(&mut app, "B");
    press(&mut app, KeyCode::Tab);

    // Edit A, type "2", cancel.
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.focus, PanelFocus::Row);
    type_str(&mut app, "2");
    let screen = render(&app);
    assert!(screen.contains("A2█"));
    assert!(screen.contains("[esc] cancel"));
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.focus, PanelFocus::List);
    assert_eq!(app.tasks.tasks()[0].title, "A");
    assert!(render(&app).contains("[ ] A  [e] edit"));

    // Edit again, type "2", submit.
    press(&mut app, KeyCode::Char('e'));
    type_str(&mut app, "2");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.focus, PanelFocus::List);
    let titles: Vec<&str> = app.tasks.tasks().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["A2", "B"]);
}

#[test]
fn keys_while_editing_go_to_the_draft() {
    let mut app = make_app();
    add_task(&mut app, "A");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('e'));

    // 'd', 'j' and Tab would mean remove, move down and switch panel in the list.
    type_str(&mut app, "dj");
    press(&mut app, KeyCode::Tab);
    assert!(app.dialog.is_none());
    assert_eq!(app.focus, PanelFocus::Row);
    assert_eq!(
        app.rows.get(TaskId::from_raw(1)).unwrap().draft(),
        "Adj"
    );
}

#[test]
fn remove_yes_then_no() {
    let mut app = make_app();
    add_task(&mut app, "A");
    add_task(&mut app, "B");
    press(&mut app, KeyCode::Tab);

    press(&mut app, KeyCode::Char('d'));
    let screen = render(&app);
    assert!(screen.contains("Remove item"));
    assert!(screen.contains("\"A\""));
    press(&mut app, KeyCode::Char('y'));
    assert_eq!(app.tasks.len(), 1);
    assert_eq!(app.tasks.tasks()[0].title, "B");
    assert!(render(&app).contains("1 task"));

    press(&mut app, KeyCode::Char('d'));
    assert!(matches!(app.dialog, Some(Dialog::ConfirmRemoval(_))));
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.tasks.len(), 1);
    assert_eq!(app.tasks.tasks()[0].title, "B");
}

#[test]
fn selected_row_below_the_fold_is_drawn() {
    let mut app = make_app();
    for n in 0..30 {
        add_task(&mut app, &format!("task{n:02}"));
    }
    press(&mut app, KeyCode::Tab);
    for _ in 0..29 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(app.selected, 29);

    let screen = render(&app);
    assert!(screen.contains("[ ] task29"));
    assert!(!screen.contains("task00"));

    // Editing the last row shows its draft too.
    press(&mut app, KeyCode::Char('e'));
    type_str(&mut app, "!");
    assert!(render(&app).contains("task29!█"));
    press(&mut app, KeyCode::Esc);

    for _ in 0..29 {
        press(&mut app, KeyCode::Up);
    }
    let screen = render(&app);
    assert!(screen.contains("[ ] task00"));
    assert!(!screen.contains("task29"));
}

#[test]
fn empty_list_and_placeholder() {
    let mut app = make_app().with_input_placeholder("What needs doing?");
    press(&mut app, KeyCode::Tab);
    let screen = render(&app);
    assert!(screen.contains("Nothing to do yet."));
    assert!(screen.contains("What needs doing?"));
    assert!(screen.contains("0 tasks"));
}

#[test]
fn header_uses_configured_title() {
    let app = make_app().with_title("to.do");
    assert!(render(&app).contains("to.do"));
}
