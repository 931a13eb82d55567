//! Storage backend port: keyed string values with change notification.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

/// Result type for storage backend operations.
pub type StorageBackendResult<T> = Result<T, StorageBackendError>;

/// Identifies one store handle as the origin of its own writes.
///
/// A handle skips change events carrying its own origin, mirroring the
/// browser convention that the writing tab does not receive the storage
/// event it caused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OriginId(u64);

impl OriginId {
    /// Allocates a process-unique origin token.
    #[must_use]
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle identifying a registered change listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Change notification delivered to subscribed listeners after a write or
/// removal on the backend.
#[derive(Debug, Clone)]
pub struct StorageEvent {
    /// Key whose value changed.
    pub key: String,
    /// Newly written raw value, or `None` when the key was removed.
    pub new_value: Option<String>,
    /// Origin token of the handle that performed the write.
    pub origin: OriginId,
}

/// Observer for backend change events.
pub trait StorageListener: Send + Sync {
    /// Called after a value under some key changes on the backend.
    fn on_change(&self, event: &StorageEvent);
}

/// Keyed string storage contract.
///
/// Backends persist one raw string per key and broadcast change events to
/// subscribed listeners. A single-process backend with no external writers
/// may implement subscription as a no-op.
pub trait StorageBackend: Send + Sync {
    /// Reads the raw value at `key`, or `None` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StorageBackendError::Backend`] when the underlying read
    /// fails.
    fn read(&self, key: &str) -> StorageBackendResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageBackendError::QuotaExceeded`] when the write exceeds
    /// the backend's capacity, or [`StorageBackendError::Backend`] for any
    /// other write failure.
    fn write(&self, key: &str, value: &str, origin: OriginId) -> StorageBackendResult<()>;

    /// Removes the value under `key`. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`StorageBackendError::Backend`] when the removal fails.
    fn remove(&self, key: &str, origin: OriginId) -> StorageBackendResult<()>;

    /// Registers a change listener and returns its subscription handle.
    fn subscribe(&self, listener: Arc<dyn StorageListener>) -> SubscriptionId;

    /// Removes a previously registered listener. Unknown handles are ignored.
    fn unsubscribe(&self, subscription: SubscriptionId);
}

/// Errors returned by storage backend implementations.
#[derive(Debug, Clone, Error)]
pub enum StorageBackendError {
    /// The write exceeded the backend's storage capacity.
    #[error("storage quota exceeded for key \"{key}\"")]
    QuotaExceeded {
        /// Key whose write exceeded the quota.
        key: String,
    },

    /// Backend-specific failure.
    #[error("storage backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl StorageBackendError {
    /// Wraps a backend-specific error.
    #[must_use]
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
