//! The session's task list.
//!
//! `TaskList` is the single owner of the ordered task sequence. Views read
//! it through shared references and change it only through the named
//! operations here or through [`TaskList::apply`].

use crate::TaskError;
use crate::command::{CommandOutcome, Confirmation, PendingRemoval, TaskCommand};
use crate::task::{IdStrategy, Task, TaskId, TaskIdGenerator};

/// Ordered, in-memory list of tasks. Insertion order is display order.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    ids: TaskIdGenerator,
    /// Bumped on every successful mutation.
    revision: u64,
}

impl TaskList {
    /// Creates an empty list using the given id strategy.
    #[must_use]
    pub const fn new(strategy: IdStrategy) -> Self {
        Self::with_id_generator(TaskIdGenerator::new(strategy))
    }

    /// Creates an empty list drawing ids from `ids`.
    #[must_use]
    pub const fn with_id_generator(ids: TaskIdGenerator) -> Self {
        Self {
            tasks: Vec::new(),
            ids,
            revision: 0,
        }
    }

    /// Appends a new open task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::TitleEmpty`] for an empty title, or
    /// [`TaskError::DuplicateTitle`] if a task with exactly this title
    /// already exists. The list is untouched in both cases.
    pub fn add(&mut self, title: &str) -> Result<TaskId, TaskError> {
        if title.is_empty() {
            return Err(TaskError::TitleEmpty);
        }
        if self.tasks.iter().any(|t| t.title == title) {
            tracing::debug!(title, "rejected duplicate task title");
            return Err(TaskError::DuplicateTitle(title.to_string()));
        }

        let id = self.ids.next_id();
        self.tasks.push(Task::new(id, title));
        self.revision += 1;
        tracing::debug!(task_id = %id, title, "task added");
        Ok(id)
    }

    /// Replaces the title of task `id`. Returns `false` if there is no such task.
    ///
    /// No duplicate check is made here: renaming can leave two tasks with
    /// the same title.
    pub fn rename(&mut self, id: TaskId, new_title: &str) -> bool {
        let Some(task) = self.get_mut(id) else {
            tracing::debug!(task_id = %id, "rename ignored, no such task");
            return false;
        };
        task.title = new_title.to_string();
        self.revision += 1;
        tracing::debug!(task_id = %id, title = new_title, "task renamed");
        true
    }

    /// Flips the done flag of task `id`. Returns `false` if there is no such task.
    pub fn toggle_done(&mut self, id: TaskId) -> bool {
        let Some(task) = self.get_mut(id) else {
            tracing::debug!(task_id = %id, "toggle ignored, no such task");
            return false;
        };
        task.done = !task.done;
        let done = task.done;
        self.revision += 1;
        tracing::debug!(task_id = %id, done, "task toggled");
        true
    }

    /// Starts removing task `id`.
    ///
    /// Nothing is removed yet; the returned [`PendingRemoval`] must be passed
    /// to [`resolve_removal`](Self::resolve_removal) with the user's answer.
    /// Returns `None` if there is no such task.
    #[must_use]
    pub fn request_removal(&self, id: TaskId) -> Option<PendingRemoval> {
        let Some(task) = self.get(id) else {
            tracing::debug!(task_id = %id, "removal ignored, no such task");
            return None;
        };
        Some(PendingRemoval {
            id,
            title: task.title.clone(),
        })
    }

    /// Finishes a removal. On [`Confirmation::Yes`] the task is removed and
    /// returned; the remaining tasks keep their order. On
    /// [`Confirmation::No`] nothing changes.
    pub fn resolve_removal(
        &mut self,
        pending: PendingRemoval,
        answer: Confirmation,
    ) -> Option<Task> {
        if answer == Confirmation::No {
            tracing::debug!(task_id = %pending.id, "removal declined");
            return None;
        }
        let index = self.tasks.iter().position(|t| t.id == pending.id)?;
        let removed = self.tasks.remove(index);
        self.revision += 1;
        tracing::debug!(task_id = %removed.id, title = %removed.title, "task removed");
        Some(removed)
    }

    /// Applies a command from a view.
    pub fn apply(&mut self, command: TaskCommand) -> CommandOutcome {
        match command {
            TaskCommand::Add(title) => match self.add(&title) {
                Ok(id) => CommandOutcome::Added(id),
                Err(e) => CommandOutcome::Rejected(e),
            },
            TaskCommand::Rename { id, title } => {
                if self.rename(id, &title) {
                    CommandOutcome::Renamed(id)
                } else {
                    CommandOutcome::Ignored(id)
                }
            }
            TaskCommand::ToggleDone(id) => {
                if self.toggle_done(id) {
                    CommandOutcome::Toggled(id)
                } else {
                    CommandOutcome::Ignored(id)
                }
            }
            TaskCommand::Remove(id) => self
                .request_removal(id)
                .map_or(CommandOutcome::Ignored(id), CommandOutcome::RemovalRequested),
        }
    }

    /// All tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Number of tasks, as shown by the header counter.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list has no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of tasks marked done.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    /// Counter bumped by every successful mutation. Equal revisions mean an
    /// unchanged list.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }
}
