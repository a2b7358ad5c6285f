//! Inline-edit state for task rows.
//!
//! Each rendered row owns a [`RowEditor`]. It holds the draft title and
//! whether the row is in edit mode; none of this is written to the task
//! list until the row submits.

use std::collections::HashMap;

use crate::command::TaskCommand;
use crate::task::{Task, TaskId};

/// Edit mode of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Showing the title; the text field is read-only.
    #[default]
    Viewing,
    /// The text field is editable.
    Editing,
}

/// Focus change the view must apply to the row's text field after a
/// transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Move input focus into the text field.
    Gain,
    /// Take focus away from the text field.
    Release,
    /// Leave focus where it is.
    Unchanged,
}

/// Which edit button the row shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAffordance {
    /// Offer to start editing.
    StartEdit,
    /// Offer to cancel the edit in progress.
    Cancel,
}

/// Per-row edit controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEditor {
    task_id: TaskId,
    mode: EditMode,
    draft: String,
    /// Cursor position in the draft (character index).
    cursor: usize,
}

impl RowEditor {
    /// Mounts an editor for `task`, with the draft set to its title.
    #[must_use]
    pub fn new(task: &Task) -> Self {
        Self {
            task_id: task.id,
            mode: EditMode::Viewing,
            draft: task.title.clone(),
            cursor: task.title.chars().count(),
        }
    }

    /// Task this row belongs to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Current edit mode.
    #[must_use]
    pub const fn mode(&self) -> EditMode {
        self.mode
    }

    /// Whether the row is in edit mode.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.mode, EditMode::Editing)
    }

    /// Text shown in the row's field.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Cursor position in the draft, in characters.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Removing is disabled while editing.
    #[must_use]
    pub const fn can_remove(&self) -> bool {
        !self.is_editing()
    }

    /// Which edit button to show.
    #[must_use]
    pub const fn affordance(&self) -> EditAffordance {
        if self.is_editing() {
            EditAffordance::Cancel
        } else {
            EditAffordance::StartEdit
        }
    }

    /// Enters edit mode, keeping the draft as displayed.
    pub fn start_edit(&mut self) -> Focus {
        if self.is_editing() {
            return Focus::Unchanged;
        }
        self.mode = EditMode::Editing;
        self.cursor = self.draft.chars().count();
        Focus::Gain
    }

    /// Leaves edit mode and throws away the draft in favour of `task`'s
    /// current title.
    pub fn cancel(&mut self, task: &Task) -> Focus {
        if !self.is_editing() {
            return Focus::Unchanged;
        }
        self.draft.clone_from(&task.title);
        self.cursor = self.draft.chars().count();
        self.mode = EditMode::Viewing;
        Focus::Release
    }

    /// Leaves edit mode and returns the rename to send to the task list.
    ///
    /// The rename is produced even when the draft equals the saved title.
    /// Returns `None` while viewing.
    pub fn submit(&mut self) -> Option<TaskCommand> {
        if !self.is_editing() {
            return None;
        }
        self.mode = EditMode::Viewing;
        Some(TaskCommand::Rename {
            id: self.task_id,
            title: self.draft.clone(),
        })
    }

    /// Replaces the whole draft. Ignored while viewing.
    pub fn set_draft(&mut self, text: &str) {
        if !self.is_editing() {
            return;
        }
        text.clone_into(&mut self.draft);
        self.cursor = self.draft.chars().count();
    }

    /// Inserts a character at the cursor. Ignored while viewing.
    pub fn insert_char(&mut self, c: char) {
        if !self.is_editing() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.draft.insert(at, c);
        self.cursor += 1;
    }

    /// Deletes the character before the cursor. Ignored while viewing.
    pub fn backspace(&mut self) {
        if !self.is_editing() || self.cursor == 0 {
            return;
        }
        let at = self.byte_index(self.cursor - 1);
        self.draft.remove(at);
        self.cursor -= 1;
    }

    /// Deletes the character under the cursor. Ignored while viewing.
    pub fn delete(&mut self) {
        if !self.is_editing() || self.cursor >= self.draft.chars().count() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.draft.remove(at);
    }

    /// Moves the cursor one character left.
    pub const fn move_cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Moves the cursor one character right.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.draft.chars().count() {
            self.cursor += 1;
        }
    }

    /// Moves the cursor to the start of the draft.
    pub const fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor past the last character.
    pub fn move_cursor_end(&mut self) {
        self.cursor = self.draft.chars().count();
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.draft
            .char_indices()
            .nth(char_index)
            .map_or(self.draft.len(), |(i, _)| i)
    }
}

/// Edit state for every mounted row, keyed by task id.
#[derive(Debug, Clone, Default)]
pub struct RowStates {
    rows: HashMap<TaskId, RowEditor>,
}

impl RowStates {
    /// Creates an empty set of rows.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mounts editors for new tasks and drops those whose task is gone.
    pub fn sync(&mut self, tasks: &[Task]) {
        self.rows
            .retain(|id, _| tasks.iter().any(|task| task.id == *id));
        for task in tasks {
            self.rows
                .entry(task.id)
                .or_insert_with(|| RowEditor::new(task));
        }
    }

    /// Editor for the row of task `id`.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&RowEditor> {
        self.rows.get(&id)
    }

    /// Mutable editor for the row of task `id`.
    pub fn get_mut(&mut self, id: TaskId) -> Option<&mut RowEditor> {
        self.rows.get_mut(&id)
    }

    /// Id of the row currently being edited, if any.
    #[must_use]
    pub fn editing(&self) -> Option<TaskId> {
        self.rows
            .values()
            .find(|row| row.is_editing())
            .map(RowEditor::task_id)
    }

    /// Number of mounted rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows are mounted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
