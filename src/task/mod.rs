//! Task model and the task store facade.
//!
//! The task domain layers kanban semantics over the generic collection
//! store: validated workflow columns and priorities, typed patches with
//! `updatedAt` stamping on every mutation, and board/column filtered views.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - The store facade in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
