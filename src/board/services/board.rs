//! Board orchestration: views, creation, deletion, and drop handling.

use std::sync::Arc;

use mockable::Clock;

use crate::board::domain::{BoardView, DropEvent, DropOutcome};
use crate::board::ports::Notifier;
use crate::collection::ports::StorageBackend;
use crate::collection::services::CollectionResult;
use crate::task::domain::{
    BoardId, Column, NewTaskData, Priority, Task, TaskDomainError, TaskId,
};
use crate::task::services::TaskStore;

/// Validated payload for creating a task on a board.
///
/// Creation is the one boundary where input is checked: the title must
/// survive trimming, while priority and column fall back to their defaults
/// (medium, todo) when the caller leaves them unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    board_id: BoardId,
    title: String,
    description: Option<String>,
    assignee: Option<String>,
    priority: Priority,
    column: Column,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn new(board_id: BoardId, title: impl Into<String>) -> Result<Self, TaskDomainError> {
        let trimmed = title.into().trim().to_owned();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }
        Ok(Self {
            board_id,
            title: trimmed,
            description: None,
            assignee: None,
            priority: Priority::default(),
            column: Column::Todo,
        })
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Sets the initial column.
    #[must_use]
    pub const fn with_column(mut self, column: Column) -> Self {
        self.column = column;
        self
    }

    /// Converts the request into a task record, generating an identifier and
    /// stamping timestamps from the clock.
    #[must_use]
    pub fn into_task(self, clock: &impl Clock) -> Task {
        let id = TaskId::generate(clock.utc());
        Task::create(
            NewTaskData {
                id,
                board_id: self.board_id,
                title: self.title,
                description: self.description,
                assignee: self.assignee,
                priority: self.priority,
                column: self.column,
            },
            clock,
        )
    }
}

/// Board reconciliation service bound to one board.
///
/// Derives column views from the flat task collection and translates UI
/// events into store operations. Persist failures surface through the
/// notifier as error toasts and propagate to the caller, which owns the
/// optimistic-update rollback decision.
pub struct BoardService<B, C, N>
where
    B: StorageBackend,
    C: Clock + Send + Sync,
    N: Notifier,
{
    tasks: TaskStore<B, C>,
    board_id: BoardId,
    notifier: Arc<N>,
}

impl<B, C, N> Clone for BoardService<B, C, N>
where
    B: StorageBackend,
    C: Clock + Send + Sync,
    N: Notifier,
{
    fn clone(&self) -> Self {
        Self {
            tasks: self.tasks.clone(),
            board_id: self.board_id.clone(),
            notifier: Arc::clone(&self.notifier),
        }
    }
}

impl<B, C, N> BoardService<B, C, N>
where
    B: StorageBackend,
    C: Clock + Send + Sync,
    N: Notifier,
{
    /// Creates a board service over an existing task store.
    #[must_use]
    pub const fn new(tasks: TaskStore<B, C>, board_id: BoardId, notifier: Arc<N>) -> Self {
        Self {
            tasks,
            board_id,
            notifier,
        }
    }

    /// Returns the board this service is bound to.
    #[must_use]
    pub const fn board_id(&self) -> &BoardId {
        &self.board_id
    }

    /// Derives the current column-partitioned view of the board.
    #[must_use]
    pub fn view(&self) -> BoardView {
        BoardView::partition(self.tasks.tasks_by_board(&self.board_id))
    }

    /// Creates a task from a validated request and persists it.
    ///
    /// # Errors
    ///
    /// Propagates store write failures after surfacing them through the
    /// notifier.
    pub fn create_task(&self, request: CreateTaskRequest) -> CollectionResult<Task> {
        let task = request.into_task(&*self.tasks.clock());
        match self.tasks.add_task(task.clone()) {
            Ok(()) => {
                self.notifier
                    .success(&format!("Task \"{}\" created", task.title()));
                Ok(task)
            }
            Err(error) => {
                self.notifier
                    .error(&format!("Failed to create task: {error}"));
                Err(error)
            }
        }
    }

    /// Deletes the task with `id` from the board.
    ///
    /// # Errors
    ///
    /// Propagates store write failures after surfacing them through the
    /// notifier.
    pub fn delete_task(&self, id: &TaskId) -> CollectionResult<()> {
        match self.tasks.remove_task(id) {
            Ok(()) => {
                self.notifier.success("Task deleted");
                Ok(())
            }
            Err(error) => {
                self.notifier
                    .error(&format!("Failed to delete task: {error}"));
                Err(error)
            }
        }
    }

    /// Resolves a drop gesture and moves the dragged task when warranted.
    ///
    /// A stale task id or an unrecognised drop target ignores the gesture
    /// (reported in the outcome, never an error); dropping a task on the
    /// column it already occupies is a no-op.
    ///
    /// # Errors
    ///
    /// Propagates store write failures from the underlying move after
    /// surfacing them through the notifier.
    pub fn handle_drop(&self, event: &DropEvent) -> CollectionResult<DropOutcome> {
        let Ok(target) = Column::try_from(event.drop_target.as_str()) else {
            return Ok(DropOutcome::UnknownTarget);
        };
        let Some(task) = self.tasks.get_task(&event.dragged_id) else {
            return Ok(DropOutcome::UnknownTask);
        };
        let from = task.column();
        if from == target {
            return Ok(DropOutcome::AlreadyInColumn(target));
        }
        match self.tasks.move_task(&event.dragged_id, target) {
            Ok(()) => Ok(DropOutcome::Moved { from, to: target }),
            Err(error) => {
                self.notifier
                    .error(&format!("Failed to move task: {error}"));
                Err(error)
            }
        }
    }
}
