//! Domain model for task-list management.
//!
//! The task domain models validated record construction, status and priority
//! lifecycles, snapshot capture, and undo/redo history while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod history;
mod ids;
mod record;
mod snapshot;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use history::TaskHistory;
pub use ids::{ListenerId, TaskDescription, TaskId, TaskTitle};
pub use record::{TaskPriority, TaskRecord, TaskRecordData, TaskStatus};
pub use snapshot::TaskSnapshot;
