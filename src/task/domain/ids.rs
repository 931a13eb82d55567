//! Identifier types for the task domain.

use super::TaskDomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a task record.
///
/// Identifiers are caller-assigned strings; [`TaskId::generate`] produces the
/// conventional form combining a millisecond timestamp with a random suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a task identifier from a caller-supplied value.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskId`] when the value is empty after
    /// trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(TaskDomainError::EmptyTaskId);
        }
        Ok(Self(raw))
    }

    /// Generates a timestamp-plus-random identifier from the given instant.
    #[must_use]
    pub fn generate(now: DateTime<Utc>) -> Self {
        Self(format!(
            "{}-{}",
            now.timestamp_millis(),
            Uuid::new_v4().simple()
        ))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier grouping tasks into a board.
///
/// Boards have no persisted entity of their own; the identifier is purely a
/// foreign-key value on tasks, and a board with no matching tasks simply
/// yields an empty view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardId(String);

impl BoardId {
    /// Creates a board identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for BoardId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
