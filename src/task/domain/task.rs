//! Task record, workflow column, priority, and typed patch types.

use super::{BoardId, ParseColumnError, ParsePriorityError, TaskId};
use crate::collection::domain::Merge;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Workflow lane a task currently occupies.
///
/// The column set is closed: a task is always in exactly one of the three
/// lanes, and a persisted payload carrying any other value fails to parse
/// rather than being silently dropped from every rendered column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Column {
    /// Work has not started.
    Todo,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Done,
}

impl Column {
    /// All columns in board display order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Done];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

impl TryFrom<&str> for Column {
    type Error = ParseColumnError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            _ => Err(ParseColumnError(value.to_owned())),
        }
    }
}

/// Task priority level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal urgency; the creation default.
    #[default]
    Medium,
    /// Needs attention first.
    High,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

/// Persisted task record.
///
/// Serialises as a flat camelCase object with RFC 3339 timestamps, matching
/// the layout stored under the tasks key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    board_id: BoardId,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    assignee: Option<String>,
    priority: Priority,
    column: Column,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for assembling a new task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskData {
    /// Task identifier.
    pub id: TaskId,
    /// Board the task belongs to.
    pub board_id: BoardId,
    /// Display title.
    pub title: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Optional assignee display string.
    pub assignee: Option<String>,
    /// Priority level.
    pub priority: Priority,
    /// Initial workflow column.
    pub column: Column,
}

impl Task {
    /// Creates a task record, stamping both timestamps from the clock.
    #[must_use]
    pub fn create(data: NewTaskData, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: data.id,
            board_id: data.board_id,
            title: data.title,
            description: data.description,
            assignee: data.assignee,
            priority: data.priority,
            column: data.column,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the board the task belongs to.
    #[must_use]
    pub const fn board_id(&self) -> &BoardId {
        &self.board_id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the assignee, if any.
    #[must_use]
    pub fn assignee(&self) -> Option<&str> {
        self.assignee.as_deref()
    }

    /// Returns the priority level.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the workflow column.
    #[must_use]
    pub const fn column(&self) -> Column {
        self.column
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
}

/// Typed partial update for [`Task`].
///
/// Absent fields leave the task untouched; `created_at` and the identifiers
/// are deliberately not patchable. The patch can set `description` and
/// `assignee` but not clear them: tracked fields only ever gain or replace
/// content through updates, and nothing in the board flows removes one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    /// Replacement title.
    pub title: Option<String>,
    /// Replacement description.
    pub description: Option<String>,
    /// Replacement assignee.
    pub assignee: Option<String>,
    /// Replacement priority.
    pub priority: Option<Priority>,
    /// Replacement workflow column.
    pub column: Option<Column>,
    /// Replacement mutation timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Merge for Task {
    type Patch = TaskPatch;

    fn merge(&mut self, patch: &Self::Patch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(assignee) = &patch.assignee {
            self.assignee = Some(assignee.clone());
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(column) = patch.column {
            self.column = column;
        }
        if let Some(updated_at) = patch.updated_at {
            self.updated_at = updated_at;
        }
    }
}
