//! Task record aggregate and its status and priority enumerations.

use super::{
    ParseTaskPriorityError, ParseTaskStatusError, TaskDescription, TaskId, TaskSnapshot, TaskTitle,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Completion state of a task record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Work has not started, or has been reopened.
    #[default]
    Pending,
    /// Work is finished.
    Completed,
    /// Sentinel state carried by records produced from failed conversions.
    Error,
}

impl TaskStatus {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Completed => "COMPLETED",
            Self::Error => "ERROR",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, ParseTaskStatusError> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "PENDING" => Ok(Self::Pending),
            "COMPLETED" => Ok(Self::Completed),
            "ERROR" => Ok(Self::Error),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scheduling priority of a task record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskPriority {
    /// Can wait.
    Low,
    /// The default urgency.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl TaskPriority {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParseTaskPriorityError;

    fn try_from(value: &str) -> Result<Self, ParseTaskPriorityError> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "LOW" => Ok(Self::Low),
            "MEDIUM" => Ok(Self::Medium),
            "HIGH" => Ok(Self::High),
            _ => Err(ParseTaskPriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One item in the managed task list.
///
/// Records own their subtasks exclusively; dropping a record drops its whole
/// subtree. In-store records are created only through the store's add
/// operations, which assign the identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRecord {
    id: TaskId,
    title: TaskTitle,
    description: TaskDescription,
    status: TaskStatus,
    priority: TaskPriority,
    subtasks: Vec<TaskRecord>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for rehydrating a record outside the store, for example
/// at the interchange boundary.
#[derive(Debug, Clone)]
pub struct TaskRecordData {
    /// Record identifier.
    pub id: TaskId,
    /// Record title.
    pub title: TaskTitle,
    /// Record description.
    pub description: TaskDescription,
    /// Completion state.
    pub status: TaskStatus,
    /// Scheduling priority.
    pub priority: TaskPriority,
    /// Owned subtask subtree.
    pub subtasks: Vec<TaskRecord>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TaskRecord {
    /// Creates a fresh record with pending status and medium priority.
    pub(crate) fn new(
        id: TaskId,
        title: TaskTitle,
        description: TaskDescription,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            title,
            description,
            status: TaskStatus::default(),
            priority: TaskPriority::default(),
            subtasks: Vec::new(),
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Rehydrates a record from externally supplied data.
    #[must_use]
    pub fn from_data(data: TaskRecordData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            subtasks: data.subtasks,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the record identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the record title.
    #[must_use]
    pub const fn title(&self) -> &TaskTitle {
        &self.title
    }

    /// Returns the record description.
    #[must_use]
    pub const fn description(&self) -> &TaskDescription {
        &self.description
    }

    /// Returns the completion state.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the scheduling priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the owned subtasks in insertion order.
    #[must_use]
    pub fn subtasks(&self) -> &[TaskRecord] {
        &self.subtasks
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Captures the record's current field values for undo/redo.
    #[must_use]
    pub fn snapshot(&self) -> TaskSnapshot {
        TaskSnapshot::capture(self)
    }

    pub(crate) fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        self.status = status;
        self.touch(clock);
    }

    pub(crate) fn set_description(&mut self, description: TaskDescription, clock: &impl Clock) {
        self.description = description;
        self.touch(clock);
    }

    pub(crate) fn set_priority(&mut self, priority: TaskPriority, clock: &impl Clock) {
        self.priority = priority;
        self.touch(clock);
    }

    pub(crate) fn push_subtask(&mut self, subtask: TaskRecord, clock: &impl Clock) {
        self.subtasks.push(subtask);
        self.touch(clock);
    }

    pub(crate) fn subtasks_mut(&mut self) -> &mut Vec<TaskRecord> {
        &mut self.subtasks
    }

    /// Overwrites the mutable fields from a snapshot of the same record.
    pub(crate) fn apply_snapshot(&mut self, snapshot: &TaskSnapshot, clock: &impl Clock) {
        self.title = snapshot.title().clone();
        self.description = snapshot.description().clone();
        self.status = snapshot.status();
        self.priority = snapshot.priority();
        self.touch(clock);
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }

    fn fmt_at_depth(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = depth * 2;
        write!(
            f,
            "{:indent$}ID: {} | {} | Status: {} | Priority: {}",
            "", self.id, self.title, self.status, self.priority
        )?;
        for subtask in &self.subtasks {
            writeln!(f)?;
            subtask.fmt_at_depth(f, depth + 1)?;
        }
        Ok(())
    }
}

// Record identity follows the store-assigned identifier; other fields do not
// participate in equality or hashing.
impl PartialEq for TaskRecord {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TaskRecord {}

impl Hash for TaskRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for TaskRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_at_depth(f, 0)
    }
}
