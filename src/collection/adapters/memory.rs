//! In-process shared storage backend with change broadcast.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::collection::ports::{
    OriginId, StorageBackend, StorageBackendError, StorageBackendResult, StorageEvent,
    StorageListener, SubscriptionId,
};

/// Thread-safe in-memory storage backend.
///
/// Clones share the same underlying map, so two store handles built over
/// clones of one `MemoryStorage` observe each other's writes through change
/// events, standing in for separate browsing contexts sharing an origin's
/// storage. An optional byte capacity makes quota failures reproducible.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    state: Arc<RwLock<MemoryState>>,
}

#[derive(Default)]
struct MemoryState {
    values: HashMap<String, String>,
    listeners: HashMap<SubscriptionId, Arc<dyn StorageListener>>,
    next_subscription: u64,
    capacity: Option<usize>,
}

impl MemoryStorage {
    /// Creates an empty backend with unlimited capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty backend that rejects writes once the total stored
    /// bytes would exceed `capacity`.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let storage = Self::default();
        if let Ok(mut state) = storage.state.write() {
            state.capacity = Some(capacity);
        }
        storage
    }

    fn lock_error(err: impl ToString) -> StorageBackendError {
        StorageBackendError::backend(std::io::Error::other(err.to_string()))
    }

    /// Snapshots the registered listeners so notification happens outside
    /// the state lock.
    fn listeners(&self) -> Vec<Arc<dyn StorageListener>> {
        self.state
            .read()
            .map(|state| state.listeners.values().cloned().collect())
            .unwrap_or_default()
    }

    fn notify(&self, event: &StorageEvent) {
        for listener in self.listeners() {
            listener.on_change(event);
        }
    }
}

/// Total bytes the map would hold after replacing `key`'s value with `value`.
fn projected_size(values: &HashMap<String, String>, key: &str, value: &str) -> usize {
    let current: usize = values
        .iter()
        .filter(|(stored_key, _)| stored_key.as_str() != key)
        .map(|(stored_key, stored_value)| stored_key.len() + stored_value.len())
        .sum();
    current + key.len() + value.len()
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> StorageBackendResult<Option<String>> {
        let state = self.state.read().map_err(Self::lock_error)?;
        Ok(state.values.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str, origin: OriginId) -> StorageBackendResult<()> {
        {
            let mut state = self.state.write().map_err(Self::lock_error)?;
            if let Some(capacity) = state.capacity
                && projected_size(&state.values, key, value) > capacity
            {
                return Err(StorageBackendError::QuotaExceeded {
                    key: key.to_owned(),
                });
            }
            state.values.insert(key.to_owned(), value.to_owned());
        }
        self.notify(&StorageEvent {
            key: key.to_owned(),
            new_value: Some(value.to_owned()),
            origin,
        });
        Ok(())
    }

    fn remove(&self, key: &str, origin: OriginId) -> StorageBackendResult<()> {
        let removed = {
            let mut state = self.state.write().map_err(Self::lock_error)?;
            state.values.remove(key).is_some()
        };
        if removed {
            self.notify(&StorageEvent {
                key: key.to_owned(),
                new_value: None,
                origin,
            });
        }
        Ok(())
    }

    fn subscribe(&self, listener: Arc<dyn StorageListener>) -> SubscriptionId {
        self.state.write().map_or(SubscriptionId(0), |mut state| {
            state.next_subscription += 1;
            let subscription = SubscriptionId(state.next_subscription);
            state.listeners.insert(subscription, listener);
            subscription
        })
    }

    fn unsubscribe(&self, subscription: SubscriptionId) {
        if let Ok(mut state) = self.state.write() {
            state.listeners.remove(&subscription);
        }
    }
}
