//! Unit tests for the task domain and store facade.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]
#![expect(
    clippy::indexing_slicing,
    reason = "Test code indexes JSON values whose layout it just asserted"
)]


use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;

/// Clock advancing one second per reading, so "strictly later" assertions
/// hold regardless of wall-clock resolution.
pub(crate) struct SteppingClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    pub(crate) fn new() -> Self {
        let start = Utc
            .with_ymd_and_hms(2026, 1, 15, 9, 0, 0)
            .single()
            .expect("fixed timestamp is unambiguous");
        Self {
            start,
            ticks: AtomicI64::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + TimeDelta::seconds(tick)
    }
}
