//! Directory-backed storage adapter using capability-based filesystem access.

use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use cap_std::ambient_authority;
use cap_std::fs::Dir;

use crate::collection::ports::{
    OriginId, StorageBackend, StorageBackendError, StorageBackendResult, StorageListener,
    SubscriptionId,
};

/// Durable storage backend mapping each key to a `<key>.json` file inside a
/// sandboxed directory.
///
/// Writes stage through a `<key>.json.tmp` sibling and rename into place,
/// so the key either holds its previous value or the complete new one.
///
/// The adapter is single-process: no external writer feeds change events, so
/// subscription is inert.
pub struct DirStorage {
    dir: Dir,
}

impl DirStorage {
    /// Opens the backend over an existing directory at `root`.
    ///
    /// # Errors
    ///
    /// Returns the underlying IO error when the directory cannot be opened.
    pub fn open_ambient(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let dir = Dir::open_ambient_dir(root, ambient_authority())?;
        Ok(Self { dir })
    }

    /// Wraps an already-opened capability directory.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }

    fn file_name(key: &str) -> String {
        format!("{key}.json")
    }

    fn staging_name(key: &str) -> String {
        format!("{key}.json.tmp")
    }
}

/// Maps a filesystem write failure to the backend error taxonomy.
fn classify_write_error(key: &str, err: std::io::Error) -> StorageBackendError {
    match err.kind() {
        ErrorKind::StorageFull | ErrorKind::QuotaExceeded => {
            StorageBackendError::QuotaExceeded {
                key: key.to_owned(),
            }
        }
        _ => StorageBackendError::backend(err),
    }
}

impl StorageBackend for DirStorage {
    fn read(&self, key: &str) -> StorageBackendResult<Option<String>> {
        match self.dir.read_to_string(Self::file_name(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageBackendError::backend(err)),
        }
    }

    fn write(&self, key: &str, value: &str, _origin: OriginId) -> StorageBackendResult<()> {
        // Staged write plus rename, so an interrupted write can never leave
        // a truncated value under the key.
        let staging = Self::staging_name(key);
        if let Err(err) = self.dir.write(&staging, value.as_bytes()) {
            self.dir.remove_file(&staging).ok();
            return Err(classify_write_error(key, err));
        }
        self.dir
            .rename(&staging, &self.dir, Self::file_name(key))
            .map_err(|err| classify_write_error(key, err))
    }

    fn remove(&self, key: &str, _origin: OriginId) -> StorageBackendResult<()> {
        match self.dir.remove_file(Self::file_name(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageBackendError::backend(err)),
        }
    }

    fn subscribe(&self, _listener: Arc<dyn StorageListener>) -> SubscriptionId {
        SubscriptionId(0)
    }

    fn unsubscribe(&self, _subscription: SubscriptionId) {}
}
