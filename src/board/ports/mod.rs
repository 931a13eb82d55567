//! Port contracts for board reconciliation.

pub mod notifier;

pub use notifier::{Notifier, Severity};
