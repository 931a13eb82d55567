//! Kanban board reconciliation.
//!
//! The board layer derives the three column-partitioned views from the flat
//! task collection scoped to one board, translates drag-and-drop gestures
//! into task moves, and validates task-creation input before it reaches the
//! store. User-visible failures surface through the notifier port. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The board service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
