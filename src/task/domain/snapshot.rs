//! Immutable point-in-time captures of task record state.

use super::{TaskDescription, TaskId, TaskPriority, TaskRecord, TaskStatus, TaskTitle};
use serde::{Deserialize, Serialize};

/// Immutable capture of one record's field values.
///
/// Snapshots never change after creation; they are owned by whichever
/// history stack holds them. Subtasks are not captured; history operates on
/// a single record's own fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSnapshot {
    id: TaskId,
    title: TaskTitle,
    description: TaskDescription,
    status: TaskStatus,
    priority: TaskPriority,
}

impl TaskSnapshot {
    /// Captures the current state of a record.
    #[must_use]
    pub fn capture(record: &TaskRecord) -> Self {
        Self {
            id: record.id(),
            title: record.title().clone(),
            description: record.description().clone(),
            status: record.status(),
            priority: record.priority(),
        }
    }

    /// Returns the identifier of the captured record.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the captured title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the captured description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the captured completion state.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the captured priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }
}
