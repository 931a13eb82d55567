//! Unit tests for the collection store and its backends.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]


use serde::{Deserialize, Serialize};

use crate::collection::domain::Merge;

/// Minimal keyed record for exercising the generic store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Note {
    pub id: String,
    pub body: String,
}

impl Note {
    pub(crate) fn new(id: &str, body: &str) -> Self {
        Self {
            id: id.to_owned(),
            body: body.to_owned(),
        }
    }
}

/// Typed patch for [`Note`].
#[derive(Debug, Clone, Default)]
pub(crate) struct NotePatch {
    pub body: Option<String>,
}

impl Merge for Note {
    type Patch = NotePatch;

    fn merge(&mut self, patch: &Self::Patch) {
        if let Some(body) = &patch.body {
            self.body = body.clone();
        }
    }
}
