//! Error taxonomy for collection store operations.

use crate::collection::ports::StorageBackendError;
use thiserror::Error;

/// Errors recorded or returned by the collection store.
///
/// Read-path failures (`Parse`, `Load`, `Sync`) are absorbed by the store:
/// the mirror keeps a displayable value and the error is retained for
/// inspection. Write-path failures (`Quota`, `Save`, `Clear`) are retained
/// and also returned, because the caller owns the decision of how to
/// reconcile an optimistic update with a failed persist.
#[derive(Debug, Clone, Error)]
pub enum CollectionError {
    /// The stored value was not valid JSON or not an array.
    #[error("failed to parse stored value for key \"{key}\"")]
    Parse {
        /// Storage key whose value failed to parse.
        key: String,
    },

    /// The underlying storage read failed.
    #[error("failed to load key \"{key}\": {source}")]
    Load {
        /// Storage key that could not be read.
        key: String,
        /// Backend failure that caused the load error.
        source: StorageBackendError,
    },

    /// A change event from another handle carried an unparseable value.
    #[error("failed to sync key \"{key}\" from another writer")]
    Sync {
        /// Storage key whose change event failed to parse.
        key: String,
    },

    /// A write exceeded the storage quota.
    #[error("storage quota exceeded while writing key \"{key}\"")]
    Quota {
        /// Storage key whose write exceeded the quota.
        key: String,
    },

    /// A write failed for a reason other than quota exhaustion.
    #[error("failed to write key \"{key}\": {source}")]
    Save {
        /// Storage key that could not be written.
        key: String,
        /// Backend failure that caused the save error.
        source: StorageBackendError,
    },

    /// Removing the key's value failed.
    #[error("failed to clear key \"{key}\": {source}")]
    Clear {
        /// Storage key that could not be cleared.
        key: String,
        /// Backend failure that caused the clear error.
        source: StorageBackendError,
    },
}

impl CollectionError {
    /// Classifies a backend write failure as a quota or generic save error.
    #[must_use]
    pub fn from_write_failure(key: &str, source: StorageBackendError) -> Self {
        match source {
            StorageBackendError::QuotaExceeded { .. } => Self::Quota {
                key: key.to_owned(),
            },
            StorageBackendError::Backend(_) => Self::Save {
                key: key.to_owned(),
                source,
            },
        }
    }

    /// Returns true when the error originated on a read path.
    #[must_use]
    pub const fn is_read_failure(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::Load { .. } | Self::Sync { .. })
    }
}
