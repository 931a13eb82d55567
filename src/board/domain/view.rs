//! Column-partitioned board view.

use crate::task::domain::{Column, Task};

/// The three column buckets of one board, each in insertion order.
///
/// A task lands in exactly the bucket matching its `column` field; the
/// partition is re-derived from the flat collection on every read rather
/// than maintained incrementally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    todo: Vec<Task>,
    in_progress: Vec<Task>,
    done: Vec<Task>,
}

impl BoardView {
    /// Partitions `tasks` into column buckets.
    #[must_use]
    pub fn partition(tasks: impl IntoIterator<Item = Task>) -> Self {
        let mut view = Self::default();
        for task in tasks {
            match task.column() {
                Column::Todo => view.todo.push(task),
                Column::InProgress => view.in_progress.push(task),
                Column::Done => view.done.push(task),
            }
        }
        view
    }

    /// Returns the tasks in `column`, in insertion order.
    #[must_use]
    pub fn column(&self, column: Column) -> &[Task] {
        match column {
            Column::Todo => &self.todo,
            Column::InProgress => &self.in_progress,
            Column::Done => &self.done,
        }
    }

    /// Returns the number of tasks in `column`.
    #[must_use]
    pub fn count(&self, column: Column) -> usize {
        self.column(column).len()
    }

    /// Returns the number of tasks across all columns.
    #[must_use]
    pub fn total(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    /// Returns true when the board has no tasks at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
