//! Key-addressed collection persistence with an in-memory mirror.

use std::sync::{Arc, RwLock, Weak};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::collection::domain::{CollectionError, Merge};
use crate::collection::ports::{
    OriginId, StorageBackend, StorageBackendError, StorageEvent, StorageListener, SubscriptionId,
};

/// Result type for collection store operations.
pub type CollectionResult<T> = Result<T, CollectionError>;

/// Generic keyed-array store over a [`StorageBackend`].
///
/// The store serialises its items as one JSON array under a single key and
/// keeps an in-memory mirror in lockstep with the persisted value. Reads are
/// always served from the mirror; the backend is only re-read when another
/// handle writes to the same key, in which case the newly written value fully
/// replaces the mirror (last-write-wins, no merge).
///
/// Read-path failures never surface as `Err`: the mirror falls back to the
/// configured initial value and the failure is retained as [`Self::last_error`].
/// Write-path failures are retained *and* returned, so a caller that applied
/// an optimistic update can roll it back or retry.
pub struct CollectionStore<T, B>
where
    B: StorageBackend,
{
    backend: Arc<B>,
    key: String,
    origin: OriginId,
    subscription: SubscriptionId,
    state: Arc<RwLock<MirrorState<T>>>,
    initial: Vec<T>,
}

struct MirrorState<T> {
    items: Vec<T>,
    last_error: Option<CollectionError>,
}

/// Backend listener keeping one store's mirror in sync with foreign writes.
struct SyncListener<T> {
    key: String,
    origin: OriginId,
    state: Weak<RwLock<MirrorState<T>>>,
}

impl<T> StorageListener for SyncListener<T>
where
    T: DeserializeOwned + Send + Sync,
{
    fn on_change(&self, event: &StorageEvent) {
        if event.key != self.key || event.origin == self.origin {
            return;
        }
        // Removal events carry no value and are not mirrored.
        let Some(new_value) = &event.new_value else {
            return;
        };
        let Some(state) = self.state.upgrade() else {
            return;
        };
        let Ok(mut state) = state.write() else {
            return;
        };
        match serde_json::from_str::<Vec<T>>(new_value) {
            Ok(items) => {
                state.items = items;
                state.last_error = None;
            }
            // Mirror keeps its last good value on an unparseable sync payload.
            Err(_) => {
                state.last_error = Some(CollectionError::Sync {
                    key: self.key.clone(),
                });
            }
        }
    }
}

impl<T, B> CollectionStore<T, B>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync + 'static,
    B: StorageBackend,
{
    /// Attaches a store to `key` with an empty initial collection.
    ///
    /// Hydration happens here: the stored value is read once and parsed, an
    /// absent or unparseable value falls back to the initial collection, and
    /// a change listener is registered with the backend.
    #[must_use]
    pub fn attach(backend: Arc<B>, key: impl Into<String>) -> Self {
        Self::with_initial(backend, key, Vec::new())
    }

    /// Attaches a store to `key`, falling back to `initial` when the key is
    /// absent or its value cannot be parsed.
    #[must_use]
    pub fn with_initial(backend: Arc<B>, key: impl Into<String>, initial: Vec<T>) -> Self {
        let key = key.into();
        let origin = OriginId::next();
        let (items, last_error) = hydrate(backend.as_ref(), &key, &initial);
        let state = Arc::new(RwLock::new(MirrorState { items, last_error }));
        let listener = Arc::new(SyncListener {
            key: key.clone(),
            origin,
            state: Arc::downgrade(&state),
        });
        let subscription = backend.subscribe(listener);
        Self {
            backend,
            key,
            origin,
            subscription,
            state,
            initial,
        }
    }

    /// Returns the storage key this store is bound to.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns a snapshot of the mirrored collection, in insertion order.
    #[must_use]
    pub fn items(&self) -> Vec<T> {
        self.state
            .read()
            .map(|state| state.items.clone())
            .unwrap_or_default()
    }

    /// Returns the most recent recorded error, if any.
    ///
    /// Cleared by the next successful operation.
    #[must_use]
    pub fn last_error(&self) -> Option<CollectionError> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.last_error.clone())
    }

    /// Replaces the persisted collection with `items`.
    ///
    /// The mirror is updated only after the backend accepts the write, so a
    /// failed save leaves the mirror at its previous value.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Quota`] when the write exceeds the storage
    /// quota and [`CollectionError::Save`] for any other write failure,
    /// including serialisation.
    pub fn save(&self, items: Vec<T>) -> CollectionResult<()> {
        self.persist(items)
    }

    /// Removes the key's value entirely and resets the mirror to the initial
    /// collection.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::Clear`] when the removal fails.
    pub fn clear(&self) -> CollectionResult<()> {
        match self.backend.remove(&self.key, self.origin) {
            Ok(()) => {
                self.commit(self.initial.clone());
                Ok(())
            }
            Err(source) => {
                let error = CollectionError::Clear {
                    key: self.key.clone(),
                    source,
                };
                self.record_error(error.clone());
                Err(error)
            }
        }
    }

    /// Appends `item` and persists the new collection.
    ///
    /// # Errors
    ///
    /// Propagates write failures as [`CollectionError::Quota`] or
    /// [`CollectionError::Save`].
    pub fn add_item(&self, item: T) -> CollectionResult<()> {
        let mut items = self.items();
        items.push(item);
        self.persist(items)
    }

    /// Shallow-merges `patch` onto every item matching `predicate` and
    /// persists the new collection. Non-matching items pass through
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Propagates write failures as [`CollectionError::Quota`] or
    /// [`CollectionError::Save`].
    pub fn update_item(
        &self,
        predicate: impl Fn(&T) -> bool,
        patch: &T::Patch,
    ) -> CollectionResult<()>
    where
        T: Merge,
    {
        let mut items = self.items();
        for item in &mut items {
            if predicate(item) {
                item.merge(patch);
            }
        }
        self.persist(items)
    }

    /// Drops every item matching `predicate` and persists the remainder.
    ///
    /// Removing nothing still persists, making repeated removal a no-op
    /// rather than an error.
    ///
    /// # Errors
    ///
    /// Propagates write failures as [`CollectionError::Quota`] or
    /// [`CollectionError::Save`].
    pub fn remove_item(&self, predicate: impl Fn(&T) -> bool) -> CollectionResult<()> {
        let mut items = self.items();
        items.retain(|item| !predicate(item));
        self.persist(items)
    }

    /// Returns the first mirrored item matching `predicate`, without touching
    /// storage.
    #[must_use]
    pub fn get_item(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.state
            .read()
            .ok()
            .and_then(|state| state.items.iter().find(|item| predicate(item)).cloned())
    }

    /// Replaces the entire collection and persists it.
    ///
    /// # Errors
    ///
    /// Propagates write failures as [`CollectionError::Quota`] or
    /// [`CollectionError::Save`].
    pub fn set_all(&self, items: Vec<T>) -> CollectionResult<()> {
        self.persist(items)
    }

    fn persist(&self, items: Vec<T>) -> CollectionResult<()> {
        let serialized = match serde_json::to_string(&items) {
            Ok(serialized) => serialized,
            Err(err) => {
                let error = CollectionError::Save {
                    key: self.key.clone(),
                    source: StorageBackendError::backend(err),
                };
                self.record_error(error.clone());
                return Err(error);
            }
        };
        match self.backend.write(&self.key, &serialized, self.origin) {
            Ok(()) => {
                self.commit(items);
                Ok(())
            }
            Err(source) => {
                let error = CollectionError::from_write_failure(&self.key, source);
                self.record_error(error.clone());
                Err(error)
            }
        }
    }

    fn commit(&self, items: Vec<T>) {
        if let Ok(mut state) = self.state.write() {
            state.items = items;
            state.last_error = None;
        }
    }

    fn record_error(&self, error: CollectionError) {
        if let Ok(mut state) = self.state.write() {
            state.last_error = Some(error);
        }
    }
}

impl<T, B> Drop for CollectionStore<T, B>
where
    B: StorageBackend,
{
    fn drop(&mut self) {
        self.backend.unsubscribe(self.subscription);
    }
}

/// Reads and parses the stored value once, falling back to `initial` on an
/// absent, unreadable, or unparseable value.
fn hydrate<T, B>(backend: &B, key: &str, initial: &[T]) -> (Vec<T>, Option<CollectionError>)
where
    T: DeserializeOwned + Clone,
    B: StorageBackend,
{
    match backend.read(key) {
        Ok(Some(raw)) => match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) => (items, None),
            Err(_) => (
                initial.to_vec(),
                Some(CollectionError::Parse {
                    key: key.to_owned(),
                }),
            ),
        },
        Ok(None) => (initial.to_vec(), None),
        Err(source) => (
            initial.to_vec(),
            Some(CollectionError::Load {
                key: key.to_owned(),
                source,
            }),
        ),
    }
}
