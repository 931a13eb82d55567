//! Drag-and-drop gesture types.

use crate::task::domain::{Column, TaskId};

/// Raw drop gesture as delivered by the drag source: the dragged task and
/// the identifier of whatever it was dropped on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropEvent {
    /// Identifier of the dragged task.
    pub dragged_id: TaskId,
    /// Raw identifier of the drop target, expected to name a column.
    pub drop_target: String,
}

impl DropEvent {
    /// Builds a drop event from raw gesture identifiers.
    ///
    /// The target stays a raw string here; resolution against the known
    /// columns happens when the gesture is handled.
    #[must_use]
    pub fn new(dragged_id: TaskId, drop_target: impl Into<String>) -> Self {
        Self {
            dragged_id,
            drop_target: drop_target.into(),
        }
    }
}

/// Resolution of one drop gesture.
///
/// The non-`Moved` variants report why a gesture changed nothing; none of
/// them are errors, since mid-drag state is never mutated and an ignorable
/// gesture simply leaves the board as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The task changed columns.
    Moved {
        /// Column the task left.
        from: Column,
        /// Column the task entered.
        to: Column,
    },
    /// The task was already in the target column.
    AlreadyInColumn(Column),
    /// The dragged id resolved to no known task (stale gesture).
    UnknownTask,
    /// The drop target named none of the known columns.
    UnknownTarget,
}
