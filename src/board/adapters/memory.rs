//! In-memory notification sink.

use std::sync::{Arc, Mutex};

use crate::board::ports::{Notifier, Severity};

/// Thread-safe notifier that records every emitted notification.
///
/// Serves tests asserting on surfaced messages and doubles as a do-nothing
/// sink for callers that never read the recording.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    entries: Arc<Mutex<Vec<(Severity, String)>>>,
}

impl RecordingNotifier {
    /// Creates an empty recording notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded notifications, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<(Severity, String)> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Returns the recorded messages at `severity`, oldest first.
    #[must_use]
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|(recorded, _)| *recorded == severity)
            .map(|(_, message)| message)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((severity, message.to_owned()));
        }
    }
}
