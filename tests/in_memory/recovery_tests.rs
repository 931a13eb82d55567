//! Failure-path integration tests: corrupt payloads and quota exhaustion.

use std::sync::Arc;

use eyre::ensure;
use rstest::rstest;
use taskflow::board::ports::Severity;
use taskflow::board::services::CreateTaskRequest;
use taskflow::collection::adapters::MemoryStorage;
use taskflow::collection::domain::CollectionError;
use taskflow::collection::ports::{OriginId, StorageBackend};
use taskflow::task::domain::{BoardId, Column};
use taskflow::task::services::TaskStore;

use super::helpers::{SteppingClock, harness_over};

#[rstest]
fn corrupt_stored_payload_degrades_to_an_empty_board() -> eyre::Result<()> {
    let backend = Arc::new(MemoryStorage::new());
    backend.write("tasks", "not json", OriginId::next())?;

    let harness = harness_over(Arc::clone(&backend));
    ensure!(harness.board.view().is_empty(), "corrupt payload must hydrate empty");

    let tasks = TaskStore::new(backend, Arc::new(SteppingClock::new()));
    ensure!(
        matches!(tasks.last_error(), Some(CollectionError::Parse { .. })),
        "parse error must be recorded, not thrown"
    );
    Ok(())
}

#[rstest]
fn board_recovers_after_overwriting_a_corrupt_payload() -> eyre::Result<()> {
    let backend = Arc::new(MemoryStorage::new());
    backend.write("tasks", "[1, 2, oops", OriginId::next())?;

    let harness = harness_over(backend);
    let request = CreateTaskRequest::new(BoardId::new("b1"), "fresh start")?;
    let created = harness.board.create_task(request)?;

    ensure!(harness.board.view().count(Column::Todo) == 1, "recovered board holds the new task");
    ensure!(created.created_at() == created.updated_at(), "fresh stamps");
    Ok(())
}

#[rstest]
fn quota_exhaustion_surfaces_and_later_writes_can_succeed() {
    let harness = harness_over(Arc::new(MemoryStorage::with_capacity(600)));

    let fits = CreateTaskRequest::new(BoardId::new("b1"), "small").expect("valid title");
    harness.board.create_task(fits).expect("small task fits");

    let oversized = CreateTaskRequest::new(BoardId::new("b1"), "huge")
        .expect("valid title")
        .with_description("x".repeat(2048));
    let result = harness.board.create_task(oversized);
    assert!(matches!(result, Err(CollectionError::Quota { .. })));
    assert_eq!(harness.board.view().total(), 1, "mirror kept its last good value");
    assert_eq!(harness.notifier.messages(Severity::Error).len(), 1);

    // The failed write consumed no capacity, so a small follow-up still fits.
    let follow_up = CreateTaskRequest::new(BoardId::new("b1"), "retry").expect("valid title");
    harness.board.create_task(follow_up).expect("retry fits");
    assert_eq!(harness.board.view().total(), 2);
}
