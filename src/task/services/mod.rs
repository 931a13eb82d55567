//! Task store facade over the generic collection store.

mod store;

pub use store::{DEFAULT_TASKS_KEY, TaskStore};
