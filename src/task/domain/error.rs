//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,
}

/// Error returned while parsing workflow columns from their string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown column: {0}")]
pub struct ParseColumnError(pub String);

/// Error returned while parsing priorities from their string form.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);
