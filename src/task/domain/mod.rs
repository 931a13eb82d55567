//! Domain model for kanban task tracking.
//!
//! The task domain models the persisted task record, its workflow column and
//! priority enumerations, typed partial updates, and filtered views, while
//! keeping all storage concerns outside of the domain boundary.

mod error;
mod filter;
mod ids;
mod sample;
mod task;

pub use error::{ParseColumnError, ParsePriorityError, TaskDomainError};
pub use filter::TaskFilter;
pub use ids::{BoardId, TaskId};
pub use sample::sample_tasks;
pub use task::{Column, NewTaskData, Priority, Task, TaskPatch};
