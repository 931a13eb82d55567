//! Generic keyed-collection persistence.
//!
//! A [`services::CollectionStore`] keeps an ordered in-memory mirror of a
//! JSON array persisted under a single string key, applies CRUD mutations to
//! both sides in lockstep, and refreshes the mirror when another handle on
//! the same backend writes to the key. Conflict resolution between handles is
//! unconditional last-write-wins. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The store service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
