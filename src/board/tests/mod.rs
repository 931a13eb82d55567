//! Unit tests for board reconciliation.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
