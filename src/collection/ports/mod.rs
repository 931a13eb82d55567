//! Port contracts for the collection store.
//!
//! Ports define infrastructure-agnostic interfaces used by the store service.

pub mod storage;

pub use storage::{
    OriginId, StorageBackend, StorageBackendError, StorageBackendResult, StorageEvent,
    StorageListener, SubscriptionId,
};
