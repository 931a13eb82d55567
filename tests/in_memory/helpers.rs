//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;
use taskflow::board::adapters::RecordingNotifier;
use taskflow::board::services::BoardService;
use taskflow::collection::adapters::MemoryStorage;
use taskflow::task::domain::BoardId;
use taskflow::task::services::TaskStore;

/// Clock advancing one second per reading, so ordering assertions hold
/// regardless of wall-clock resolution.
pub struct SteppingClock {
    start: DateTime<Utc>,
    ticks: AtomicI64,
}

impl SteppingClock {
    /// Creates a clock starting at a fixed instant.
    ///
    /// # Panics
    ///
    /// Never panics in practice; the fixed timestamp is unambiguous.
    #[must_use]
    pub fn new() -> Self {
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

impl Default for SteppingClock {
    fn default() -> Self {
        Self::new()
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

/// Fully wired board over a fresh shared backend.
pub struct BoardHarness {
    /// Board service under test.
    pub board: BoardService<MemoryStorage, SteppingClock, RecordingNotifier>,
    /// Backend shared with the board's task store.
    pub backend: Arc<MemoryStorage>,
    /// Notifier recording everything the board surfaces.
    pub notifier: Arc<RecordingNotifier>,
    /// Clock shared with the board's task store.
    pub clock: Arc<SteppingClock>,
}

/// Builds a harness over the given backend.
pub fn harness_over(backend: Arc<MemoryStorage>) -> BoardHarness {
    let clock = Arc::new(SteppingClock::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let tasks = TaskStore::new(Arc::clone(&backend), Arc::clone(&clock));
    BoardHarness {
        board: BoardService::new(tasks, BoardId::new("b1"), Arc::clone(&notifier)),
        backend,
        notifier,
        clock,
    }
}

/// Provides a fresh harness for each test.
#[fixture]
pub fn harness() -> BoardHarness {
    harness_over(Arc::new(MemoryStorage::new()))
}
