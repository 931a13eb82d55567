//! Task-shaped convenience layer over the collection store.

use std::sync::Arc;

use mockable::Clock;

use crate::collection::domain::CollectionError;
use crate::collection::ports::StorageBackend;
use crate::collection::services::{CollectionResult, CollectionStore};
use crate::task::domain::{BoardId, Column, Priority, Task, TaskFilter, TaskId, TaskPatch};

/// Storage key tasks are persisted under unless a caller picks another.
pub const DEFAULT_TASKS_KEY: &str = "tasks";

/// Task store bound to a fixed storage key.
///
/// Every operation is a thin translation of id/field arguments into the
/// generic predicate-plus-patch contract of [`CollectionStore`], with
/// `updated_at` restamped from the clock on each mutation. The store trusts
/// its input: title emptiness and enum membership are the creation
/// boundary's concern, not re-checked here.
pub struct TaskStore<B, C>
where
    B: StorageBackend,
    C: Clock + Send + Sync,
{
    store: Arc<CollectionStore<Task, B>>,
    clock: Arc<C>,
}

impl<B, C> Clone for TaskStore<B, C>
where
    B: StorageBackend,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<B, C> TaskStore<B, C>
where
    B: StorageBackend,
    C: Clock + Send + Sync,
{
    /// Creates a task store over the default tasks key.
    #[must_use]
    pub fn new(backend: Arc<B>, clock: Arc<C>) -> Self {
        Self::with_key(backend, DEFAULT_TASKS_KEY, clock)
    }

    /// Creates a task store bound to a caller-chosen storage key.
    #[must_use]
    pub fn with_key(backend: Arc<B>, key: impl Into<String>, clock: Arc<C>) -> Self {
        Self {
            store: Arc::new(CollectionStore::attach(backend, key)),
            clock,
        }
    }

    /// Returns a snapshot of all tasks, in insertion order.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.store.items()
    }

    /// Returns a handle on the clock this store stamps mutations with.
    #[must_use]
    pub fn clock(&self) -> Arc<C> {
        Arc::clone(&self.clock)
    }

    /// Returns the most recent recorded storage error, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<CollectionError> {
        self.store.last_error()
    }

    /// Appends a task and persists the collection.
    ///
    /// # Errors
    ///
    /// Propagates write failures as [`CollectionError::Quota`] or
    /// [`CollectionError::Save`].
    pub fn add_task(&self, task: Task) -> CollectionResult<()> {
        self.store.add_item(task)
    }

    /// Applies a typed patch to the task with `id`, restamping `updated_at`.
    ///
    /// A stale id patches nothing and is not an error.
    ///
    /// # Errors
    ///
    /// Propagates write failures as [`CollectionError::Quota`] or
    /// [`CollectionError::Save`].
    pub fn update_task(&self, id: &TaskId, patch: TaskPatch) -> CollectionResult<()> {
        let stamped = TaskPatch {
            updated_at: Some(self.clock.utc()),
            ..patch
        };
        self.store.update_item(|task| task.id() == id, &stamped)
    }

    /// Removes the task with `id`. Removing an unknown id is a no-op.
    ///
    /// # Errors
    ///
    /// Propagates write failures as [`CollectionError::Quota`] or
    /// [`CollectionError::Save`].
    pub fn remove_task(&self, id: &TaskId) -> CollectionResult<()> {
        self.store.remove_item(|task| task.id() == id)
    }

    /// Returns the task with `id`, if present.
    #[must_use]
    pub fn get_task(&self, id: &TaskId) -> Option<Task> {
        self.store.get_item(|task| task.id() == id)
    }

    /// Moves the task with `id` into `column`, restamping `updated_at`.
    ///
    /// # Errors
    ///
    /// Propagates write failures as [`CollectionError::Quota`] or
    /// [`CollectionError::Save`].
    pub fn move_task(&self, id: &TaskId, column: Column) -> CollectionResult<()> {
        self.update_task(
            id,
            TaskPatch {
                column: Some(column),
                ..TaskPatch::default()
            },
        )
    }

    /// Changes the priority of the task with `id`, restamping `updated_at`.
    ///
    /// # Errors
    ///
    /// Propagates write failures as [`CollectionError::Quota`] or
    /// [`CollectionError::Save`].
    pub fn update_task_priority(&self, id: &TaskId, priority: Priority) -> CollectionResult<()> {
        self.update_task(
            id,
            TaskPatch {
                priority: Some(priority),
                ..TaskPatch::default()
            },
        )
    }

    /// Returns all tasks on `board_id`, in insertion order.
    #[must_use]
    pub fn tasks_by_board(&self, board_id: &BoardId) -> Vec<Task> {
        self.tasks()
            .into_iter()
            .filter(|task| task.board_id() == board_id)
            .collect()
    }

    /// Returns all tasks currently in `column`, in insertion order.
    #[must_use]
    pub fn tasks_by_column(&self, column: Column) -> Vec<Task> {
        self.tasks()
            .into_iter()
            .filter(|task| task.column() == column)
            .collect()
    }

    /// Returns all tasks satisfying `filter`, in insertion order.
    #[must_use]
    pub fn filtered(&self, filter: &TaskFilter) -> Vec<Task> {
        self.tasks()
            .into_iter()
            .filter(|task| filter.matches(task))
            .collect()
    }

    /// Removes the tasks key entirely, resetting the mirror to empty.
    ///
    /// # Errors
    ///
    /// Propagates removal failures as [`CollectionError::Clear`].
    pub fn clear_all(&self) -> CollectionResult<()> {
        self.store.clear()
    }

    /// Replaces the whole collection, e.g. after fetching from a server.
    ///
    /// # Errors
    ///
    /// Propagates write failures as [`CollectionError::Quota`] or
    /// [`CollectionError::Save`].
    pub fn replace(&self, tasks: Vec<Task>) -> CollectionResult<()> {
        self.store.set_all(tasks)
    }
}
