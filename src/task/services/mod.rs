//! Application services for task-list management.

mod commands;
mod store;

pub use commands::{
    AddTaskCommand, CommandInvoker, DeleteTaskCommand, StoreCommand, ToggleStatusCommand,
};
pub use store::{StoreCounts, StoreError, StoreResult, TaskStore};
