//! Notification port for user-visible messages.

/// Severity of a user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Operation completed.
    Success,
    /// Operation failed.
    Error,
    /// Something needs attention but nothing failed.
    Warning,
    /// Neutral information.
    Info,
}

/// Fire-and-forget sink for toast-style notifications.
///
/// The board never consumes a return value from the sink; presentation,
/// dismissal, and timing are entirely the implementation's concern.
pub trait Notifier: Send + Sync {
    /// Emits a notification at the given severity.
    fn notify(&self, severity: Severity, message: &str);

    /// Emits a success notification.
    fn success(&self, message: &str) {
        self.notify(Severity::Success, message);
    }

    /// Emits an error notification.
    fn error(&self, message: &str) {
        self.notify(Severity::Error, message);
    }

    /// Emits a warning notification.
    fn warning(&self, message: &str) {
        self.notify(Severity::Warning, message);
    }

    /// Emits an informational notification.
    fn info(&self, message: &str) {
        self.notify(Severity::Info, message);
    }
}
