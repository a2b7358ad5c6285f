//! Core state for `Taskpad`: the session task list and per-row inline
//! editing.
//!
//! The [`TaskList`] owns the tasks and is changed only through its named
//! operations or [`TaskCommand`] values. Rows keep their draft titles in
//! [`RowEditor`]s, apart from the tasks themselves.

pub mod command;
pub mod row;
pub mod store;
pub mod task;

pub use command::{CommandOutcome, Confirmation, PendingRemoval, TaskCommand};
pub use row::{EditAffordance, EditMode, Focus, RowEditor, RowStates};
pub use store::TaskList;
pub use task::{IdStrategy, Task, TaskId, TaskIdGenerator};

use thiserror::Error;

/// Reasons the task list refuses an add.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskError {
    /// Task title cannot be empty.
    #[error("task title cannot be empty")]
    TitleEmpty,
    /// A task with exactly this title already exists.
    #[error("a task named {0:?} already exists")]
    DuplicateTitle(String),
}
