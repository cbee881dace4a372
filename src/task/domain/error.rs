//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task title exceeds the permitted length.
    #[error("task title is {actual} characters, exceeds limit of {max}")]
    TitleTooLong {
        /// The actual title length in characters.
        actual: usize,
        /// The maximum permitted length.
        max: usize,
    },

    /// The task description exceeds the permitted length.
    #[error("task description is {actual} characters, exceeds limit of {max}")]
    DescriptionTooLong {
        /// The actual description length in characters.
        actual: usize,
        /// The maximum permitted length.
        max: usize,
    },
}

/// Error returned while parsing task statuses from their wire form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from their wire form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
