//! TaskFlow: local-first kanban task tracking.
//!
//! This crate provides the storage core of a kanban-style task tracker: a
//! generic key-addressed collection store persisted as JSON, a task-shaped
//! facade over it, and the board service that partitions tasks into workflow
//! columns and translates drag-and-drop gestures into moves.
//!
//! # Architecture
//!
//! TaskFlow follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (storage backends,
//!   notification sinks)
//!
//! # Modules
//!
//! - [`collection`]: Generic keyed-array persistence with an in-memory mirror
//! - [`task`]: Task domain model and the task store facade
//! - [`board`]: Column partitioning, drag/drop reconciliation, notifications

pub mod board;
pub mod collection;
pub mod task;
