//! Commands rows send to the task list, and what came of them.

use crate::TaskError;
use crate::task::TaskId;

/// A mutation requested by a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskCommand {
    /// Append a new task with this title.
    Add(String),
    /// Replace the title of a task.
    Rename {
        /// Task to rename.
        id: TaskId,
        /// Replacement title.
        title: String,
    },
    /// Flip a task's done flag.
    ToggleDone(TaskId),
    /// Ask to remove a task. Always needs confirmation.
    Remove(TaskId),
}

/// Result of applying a [`TaskCommand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A task was appended.
    Added(TaskId),
    /// A task's title was replaced.
    Renamed(TaskId),
    /// A task's done flag was flipped.
    Toggled(TaskId),
    /// The removal is waiting for the user's answer.
    RemovalRequested(PendingRemoval),
    /// The add was refused; nothing changed.
    Rejected(TaskError),
    /// The command named a task that is not in the list; nothing changed.
    Ignored(TaskId),
}

/// The user's answer to a removal prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// Go ahead and remove.
    Yes,
    /// Keep the task. Dismissing the prompt counts as this.
    No,
}

/// A removal awaiting confirmation.
///
/// Produced by [`TaskList::request_removal`](crate::store::TaskList::request_removal)
/// and consumed by [`TaskList::resolve_removal`](crate::store::TaskList::resolve_removal).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRemoval {
    /// Task that would be removed.
    pub id: TaskId,
    /// Its title when the prompt was raised, for the dialog text.
    pub title: String,
}
