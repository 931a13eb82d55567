//! Two task stores over one backend: the cross-context sync path.

use std::sync::Arc;

use rstest::{fixture, rstest};
use taskflow::collection::adapters::MemoryStorage;
use taskflow::collection::domain::CollectionError;
use taskflow::collection::ports::{OriginId, StorageBackend};
use taskflow::task::domain::{BoardId, Column, sample_tasks};
use taskflow::task::services::TaskStore;

use super::helpers::SteppingClock;

type TestStore = TaskStore<MemoryStorage, SteppingClock>;

#[fixture]
fn backend() -> Arc<MemoryStorage> {
    Arc::new(MemoryStorage::new())
}

fn store_over(backend: &Arc<MemoryStorage>) -> TestStore {
    TaskStore::new(Arc::clone(backend), Arc::new(SteppingClock::new()))
}

#[rstest]
fn second_handle_hydrates_from_the_first_handles_writes(backend: Arc<MemoryStorage>) {
    let writer = store_over(&backend);
    let clock = SteppingClock::new();
    for task in sample_tasks(&BoardId::new("demo"), 3, &clock) {
        writer.add_task(task).expect("add persists");
    }

    let reader = store_over(&backend);
    assert_eq!(reader.tasks(), writer.tasks());
}

#[rstest]
fn mutation_in_one_handle_is_observed_by_the_other(backend: Arc<MemoryStorage>) {
    let left = store_over(&backend);
    let right = store_over(&backend);
    let clock = SteppingClock::new();
    let seeded = sample_tasks(&BoardId::new("demo"), 1, &clock);
    let id = seeded.first().expect("one sample").id().clone();
    left.replace(seeded).expect("replace persists");

    right.move_task(&id, Column::Done).expect("move persists");

    let observed = left.get_task(&id).expect("task visible in left handle");
    assert_eq!(observed.column(), Column::Done);
    assert!(left.last_error().is_none());
}

#[rstest]
fn concurrent_full_writes_resolve_to_the_last_writer(backend: Arc<MemoryStorage>) {
    let left = store_over(&backend);
    let right = store_over(&backend);
    let clock = SteppingClock::new();

    left.replace(sample_tasks(&BoardId::new("left"), 2, &clock))
        .expect("replace persists");
    right
        .replace(sample_tasks(&BoardId::new("right"), 3, &clock))
        .expect("replace persists");

    // No merge: the right handle's write fully replaced the left's.
    assert_eq!(left.tasks().len(), 3);
    assert_eq!(left.tasks(), right.tasks());
    assert!(left.tasks_by_board(&BoardId::new("left")).is_empty());
}

#[rstest]
fn corrupt_foreign_write_flags_sync_error_but_keeps_tasks(backend: Arc<MemoryStorage>) {
    let store = store_over(&backend);
    let clock = SteppingClock::new();
    let seeded = sample_tasks(&BoardId::new("demo"), 2, &clock);
    store.replace(seeded.clone()).expect("replace persists");

    backend
        .write("tasks", "[{\"id\":", OriginId::next())
        .expect("raw write succeeds");

    assert_eq!(store.tasks(), seeded);
    assert!(matches!(
        store.last_error(),
        Some(CollectionError::Sync { .. })
    ));
}
