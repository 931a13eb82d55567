//! Board reconciliation service.

mod board;

pub use board::{BoardService, CreateTaskRequest};
