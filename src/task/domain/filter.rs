//! Composable task filter for list views.

use super::{BoardId, Column, Priority, Task};

/// Filter criteria for task list views.
///
/// Empty criteria match every task; populated criteria combine with AND
/// semantics, while the column and priority lists each match any of their
/// members. The search term matches case-insensitively against title and
/// description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    columns: Vec<Column>,
    priorities: Vec<Priority>,
    board_id: Option<BoardId>,
    assignee: Option<String>,
    search: Option<String>,
}

impl TaskFilter {
    /// Creates a filter matching every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts matches to the given columns.
    #[must_use]
    pub fn with_columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        self.columns = columns.into_iter().collect();
        self
    }

    /// Restricts matches to the given priorities.
    #[must_use]
    pub fn with_priorities(mut self, priorities: impl IntoIterator<Item = Priority>) -> Self {
        self.priorities = priorities.into_iter().collect();
        self
    }

    /// Restricts matches to one board.
    #[must_use]
    pub fn with_board(mut self, board_id: BoardId) -> Self {
        self.board_id = Some(board_id);
        self
    }

    /// Restricts matches to one assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Restricts matches to tasks whose title or description contains the
    /// term, ignoring case.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Returns true when `task` satisfies every populated criterion.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if !self.columns.is_empty() && !self.columns.contains(&task.column()) {
            return false;
        }
        if !self.priorities.is_empty() && !self.priorities.contains(&task.priority()) {
            return false;
        }
        if let Some(board_id) = &self.board_id
            && task.board_id() != board_id
        {
            return false;
        }
        if let Some(assignee) = &self.assignee
            && task.assignee() != Some(assignee.as_str())
        {
            return false;
        }
        if let Some(term) = &self.search {
            return matches_search(task, term);
        }
        true
    }
}

fn matches_search(task: &Task, term: &str) -> bool {
    let needle = term.to_lowercase();
    let in_title = task.title().to_lowercase().contains(&needle);
    let in_description = task
        .description()
        .is_some_and(|description| description.to_lowercase().contains(&needle));
    in_title || in_description
}
