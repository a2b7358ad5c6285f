//! Task model and id generation for `Taskpad`.
//!
//! A [`Task`] carries only what is saved: id, title and done flag. Anything
//! being typed lives in [`RowEditor`](crate::row::RowEditor) instead.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::Deserialize;

/// Unique identifier for a task within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a `TaskId` from a raw integer.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the inner integer value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique, immutable task identifier.
    pub id: TaskId,
    /// User-provided title.
    pub title: String,
    /// Whether the task has been completed.
    pub done: bool,
}

impl Task {
    /// Creates an open task.
    #[must_use]
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }
}

/// How new task ids are derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Milliseconds since the Unix epoch, bumped past the last issued id.
    #[default]
    Timestamp,
    /// Consecutive integers starting at 1.
    Sequential,
}

impl std::fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Timestamp => write!(f, "timestamp"),
            Self::Sequential => write!(f, "sequential"),
        }
    }
}

impl std::str::FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "timestamp" => Ok(Self::Timestamp),
            "sequential" => Ok(Self::Sequential),
            other => Err(format!("unknown id strategy: {other}")),
        }
    }
}

/// Issues strictly increasing task ids for one session.
///
/// Ids are never reused, even after the task holding one is removed.
#[derive(Debug, Clone)]
pub struct TaskIdGenerator {
    strategy: IdStrategy,
    /// Last id handed out, `0` before the first call.
    last: u64,
}

impl TaskIdGenerator {
    /// Creates a generator for the given strategy.
    #[must_use]
    pub const fn new(strategy: IdStrategy) -> Self {
        Self { strategy, last: 0 }
    }

    /// Creates a sequential generator whose first id is `first`.
    #[must_use]
    pub const fn sequential_from(first: u64) -> Self {
        Self {
            strategy: IdStrategy::Sequential,
            last: first.saturating_sub(1),
        }
    }

    /// Issues the next id.
    pub fn next_id(&mut self) -> TaskId {
        let next = match self.strategy {
            IdStrategy::Timestamp => Self::now_ms().max(self.last.saturating_add(1)),
            IdStrategy::Sequential => self.last.saturating_add(1),
        };
        self.last = next;
        TaskId(next)
    }

    /// Returns the current timestamp in milliseconds since epoch.
    fn now_ms() -> u64 {
        u64::try_from(
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis(),
        )
        .unwrap_or(u64::MAX)
    }
}

impl Default for TaskIdGenerator {
    fn default() -> Self {
        Self::new(IdStrategy::default())
    }
}
