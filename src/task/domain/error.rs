//! Error types for task domain validation and parsing.

use super::TaskStatus;
use thiserror::Error;

/// Errors returned while constructing or mutating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task content is empty after trimming.
    #[error("task content must not be empty")]
    EmptyContent,

    /// The phone number contains no digits after normalization.
    #[error("phone number '{0}' contains no digits")]
    InvalidPhoneNumber(String),

    /// A status change was requested on a task outside the pending state.
    #[error("cannot move a {from} task to {to}; only pending tasks change status")]
    InvalidStatusTransition {
        /// The status the task currently holds.
        from: TaskStatus,
        /// The status the caller requested.
        to: TaskStatus,
    },
}

/// Error returned while parsing task statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParsePriorityError(pub String);
