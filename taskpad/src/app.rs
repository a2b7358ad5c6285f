//! Application state and event handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskpad_core::{
    CommandOutcome, Confirmation, Focus, IdStrategy, PendingRemoval, RowStates, TaskCommand,
    TaskError, TaskId, TaskList,
};

/// Which part of the screen receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// New-task input box is focused (default).
    Input,
    /// Task list is focused; rows are being browsed.
    List,
    /// The text field of the row being edited has focus.
    Row,
}

/// A modal dialog blocking the rest of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// An add was refused because the title already exists.
    DuplicateTitle {
        /// The rejected title.
        title: String,
    },
    /// Asks whether to remove a task.
    ConfirmRemoval(PendingRemoval),
}

/// Main application state.
pub struct App {
    /// The session's tasks.
    pub tasks: TaskList,
    /// Edit state of each rendered row.
    pub rows: RowStates,
    /// Current text in the new-task input.
    pub input: String,
    /// Cursor position in input (character index).
    pub cursor_position: usize,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Index of the selected row.
    pub selected: usize,
    /// Open modal dialog, if any.
    pub dialog: Option<Dialog>,
    /// Header title.
    pub title: String,
    /// Placeholder for the empty input box.
    pub input_placeholder: String,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Task list revision the rows were last synced against.
    synced_revision: u64,
}

impl App {
    /// Create an application with an empty task list.
    #[must_use]
    pub fn new(id_strategy: IdStrategy) -> Self {
        Self {
            tasks: TaskList::new(id_strategy),
            rows: RowStates::new(),
            input: String::new(),
            cursor_position: 0,
            focus: PanelFocus::Input,
            selected: 0,
            dialog: None,
            title: "taskpad".to_string(),
            input_placeholder: "Add a new to-do...".to_string(),
            should_quit: false,
            synced_revision: 0,
        }
    }

    /// Set the header title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the input placeholder.
    #[must_use]
    pub fn with_input_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.input_placeholder = placeholder.into();
        self
    }

    /// Id of the selected task, if the list is not empty.
    #[must_use]
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.tasks.tasks().get(self.selected).map(|t| t.id)
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.dialog.is_some() {
            self.handle_dialog_key(key);
            return;
        }

        // The row text field keeps focus until the edit is submitted or cancelled.
        if self.focus == PanelFocus::Row {
            self.handle_row_key(key);
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_focus();
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        match self.focus {
            PanelFocus::Input => self.handle_input_key(key),
            PanelFocus::List => self.handle_list_key(key),
            PanelFocus::Row => {}
        }
    }

    /// Handle key event while a dialog is open.
    fn handle_dialog_key(&mut self, key: KeyEvent) {
        let Some(dialog) = self.dialog.take() else {
            return;
        };
        match dialog {
            Dialog::DuplicateTitle { title } => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char('o' | 'O') => {}
                _ => self.dialog = Some(Dialog::DuplicateTitle { title }),
            },
            Dialog::ConfirmRemoval(pending) => {
                let answer = match key.code {
                    // "No" is the default answer; only an explicit `y` removes.
                    KeyCode::Char('y' | 'Y') => Confirmation::Yes,
                    KeyCode::Enter | KeyCode::Esc | KeyCode::Char('n' | 'N') => Confirmation::No,
                    _ => {
                        self.dialog = Some(Dialog::ConfirmRemoval(pending));
                        return;
                    }
                };
                self.tasks.resolve_removal(pending, answer);
                self.sync_rows();
            }
        }
    }

    /// Handle key event when the input is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_task(),
            KeyCode::Char(c) => self.enter_char(c),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input.chars().count(),
            _ => {}
        }
    }

    /// Handle key event when the task list is focused.
    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char(' ') | KeyCode::Enter => {
                if let Some(id) = self.selected_task_id() {
                    self.dispatch(TaskCommand::ToggleDone(id));
                }
            }
            KeyCode::Char('e') => self.start_edit(),
            KeyCode::Char('d') | KeyCode::Delete => self.request_removal(),
            _ => {}
        }
    }

    /// Handle key event while a row is being edited.
    fn handle_row_key(&mut self, key: KeyEvent) {
        let Some(id) = self.rows.editing() else {
            self.focus = PanelFocus::List;
            return;
        };
        match key.code {
            KeyCode::Enter => {
                let command = self.rows.get_mut(id).and_then(|row| row.submit());
                self.apply_focus(Focus::Release);
                if let Some(command) = command {
                    self.dispatch(command);
                }
            }
            KeyCode::Esc => {
                let focus = match (self.rows.get_mut(id), self.tasks.get(id)) {
                    (Some(row), Some(task)) => row.cancel(task),
                    _ => Focus::Release,
                };
                self.apply_focus(focus);
            }
            code => {
                let Some(row) = self.rows.get_mut(id) else {
                    return;
                };
                match code {
                    KeyCode::Char(c) => row.insert_char(c),
                    KeyCode::Backspace => row.backspace(),
                    KeyCode::Delete => row.delete(),
                    KeyCode::Left => row.move_cursor_left(),
                    KeyCode::Right => row.move_cursor_right(),
                    KeyCode::Home => row.move_cursor_home(),
                    KeyCode::End => row.move_cursor_end(),
                    _ => {}
                }
            }
        }
    }

    /// Apply a command to the task list and react to the outcome.
    pub fn dispatch(&mut self, command: TaskCommand) {
        match self.tasks.apply(command) {
            CommandOutcome::Added(id) => {
                tracing::info!(task_id = %id, count = self.tasks.len(), "task added");
                self.input.clear();
                self.cursor_position = 0;
            }
            CommandOutcome::Rejected(TaskError::DuplicateTitle(title)) => {
                tracing::info!(%title, "duplicate task title");
                self.dialog = Some(Dialog::DuplicateTitle { title });
            }
            CommandOutcome::RemovalRequested(pending) => {
                self.dialog = Some(Dialog::ConfirmRemoval(pending));
            }
            CommandOutcome::Rejected(TaskError::TitleEmpty)
            | CommandOutcome::Renamed(_)
            | CommandOutcome::Toggled(_)
            | CommandOutcome::Ignored(_) => {}
        }
        self.sync_rows();
    }

    /// Submit the input as a new task.
    fn submit_task(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }
        self.dispatch(TaskCommand::Add(self.input.clone()));
    }

    /// Put the selected row in edit mode.
    fn start_edit(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        if let Some(row) = self.rows.get_mut(id) {
            let focus = row.start_edit();
            self.apply_focus(focus);
        }
    }

    /// Ask to remove the selected task, unless its row is being edited.
    fn request_removal(&mut self) {
        let Some(id) = self.selected_task_id() else {
            return;
        };
        if self.rows.get(id).is_some_and(|row| !row.can_remove()) {
            return;
        }
        self.dispatch(TaskCommand::Remove(id));
    }

    /// Move key focus after a row edit transition.
    const fn apply_focus(&mut self, focus: Focus) {
        match focus {
            Focus::Gain => self.focus = PanelFocus::Row,
            Focus::Release => self.focus = PanelFocus::List,
            Focus::Unchanged => {}
        }
    }

    /// Re-mount rows after the task list changed.
    fn sync_rows(&mut self) {
        if self.tasks.revision() == self.synced_revision {
            return;
        }
        self.synced_revision = self.tasks.revision();
        self.rows.sync(self.tasks.tasks());
        self.selected = self.selected.min(self.tasks.len().saturating_sub(1));
    }

    /// Switch focus between the input and the list.
    const fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::List,
            PanelFocus::List | PanelFocus::Row => PanelFocus::Input,
        };
    }

    /// Insert a character at the cursor position.
    fn enter_char(&mut self, c: char) {
        let at = self
            .input
            .char_indices()
            .nth(self.cursor_position)
            .map_or(self.input.len(), |(i, _)| i);
        self.input.insert(at, c);
        self.cursor_position += 1;
    }

    /// Delete the character before the cursor.
    fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        if let Some((at, _)) = self.input.char_indices().nth(self.cursor_position - 1) {
            self.input.remove(at);
            self.cursor_position -= 1;
        }
    }

    /// Move cursor left.
    const fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    /// Move cursor right.
    fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Select the previous task.
    const fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Select the next task.
    const fn select_next(&mut self) {
        if self.selected < self.tasks.len().saturating_sub(1) {
            self.selected += 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}
