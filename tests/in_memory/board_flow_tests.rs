//! End-to-end board walks: create, view, drag, delete.

use rstest::rstest;
use taskflow::board::domain::{DropEvent, DropOutcome};
use taskflow::board::services::CreateTaskRequest;
use taskflow::task::domain::{BoardId, Column, Priority, TaskFilter};
use taskflow::task::services::TaskStore;

use super::helpers::{BoardHarness, harness};

#[rstest]
fn task_travels_across_the_board(harness: BoardHarness) {
    let request = CreateTaskRequest::new(BoardId::new("b1"), "Design homepage")
        .expect("valid title")
        .with_priority(Priority::High)
        .with_description("Hero section and nav");
    let created = harness.board.create_task(request).expect("persists");

    assert_eq!(harness.board.view().count(Column::Todo), 1);

    let picked_up = harness
        .board
        .handle_drop(&DropEvent::new(created.id().clone(), "in-progress"))
        .expect("drop persists");
    assert_eq!(
        picked_up,
        DropOutcome::Moved {
            from: Column::Todo,
            to: Column::InProgress,
        }
    );

    let finished = harness
        .board
        .handle_drop(&DropEvent::new(created.id().clone(), "done"))
        .expect("drop persists");
    assert_eq!(
        finished,
        DropOutcome::Moved {
            from: Column::InProgress,
            to: Column::Done,
        }
    );

    let view = harness.board.view();
    assert_eq!(view.count(Column::Done), 1);
    assert_eq!(view.total(), 1);

    let done = view.column(Column::Done).first().expect("task present");
    assert!(done.updated_at() > created.updated_at());
    assert_eq!(done.created_at(), created.created_at());
}

#[rstest]
fn board_view_ignores_other_boards_but_storage_keeps_them(harness: BoardHarness) {
    let local = CreateTaskRequest::new(BoardId::new("b1"), "visible").expect("valid title");
    let foreign = CreateTaskRequest::new(BoardId::new("b2"), "hidden").expect("valid title");
    harness.board.create_task(local).expect("persists");
    harness.board.create_task(foreign).expect("persists");

    assert_eq!(harness.board.view().total(), 1);

    // A store over the same backend still sees both boards' tasks.
    let all_tasks = TaskStore::new(harness.backend, harness.clock);
    assert_eq!(all_tasks.tasks().len(), 2);
    assert_eq!(all_tasks.tasks_by_board(&BoardId::new("b2")).len(), 1);
}

#[rstest]
fn deleting_the_dragged_task_makes_later_drops_stale(harness: BoardHarness) {
    let created = harness
        .board
        .create_task(CreateTaskRequest::new(BoardId::new("b1"), "ephemeral").expect("valid title"))
        .expect("persists");
    harness
        .board
        .delete_task(created.id())
        .expect("deletion persists");

    let outcome = harness
        .board
        .handle_drop(&DropEvent::new(created.id().clone(), "done"))
        .expect("drop resolves");
    assert_eq!(outcome, DropOutcome::UnknownTask);
    assert!(harness.board.view().is_empty());
}

#[rstest]
fn filtered_store_view_matches_board_contents(harness: BoardHarness) {
    for title in ["Fix login validation bug", "Write unit tests"] {
        let request = CreateTaskRequest::new(BoardId::new("b1"), title).expect("valid title");
        harness.board.create_task(request).expect("persists");
    }

    let tasks = TaskStore::new(harness.backend, harness.clock);
    let matches = tasks.filtered(
        &TaskFilter::new()
            .with_board(BoardId::new("b1"))
            .with_search("login"),
    );
    assert_eq!(matches.len(), 1);
    assert_eq!(
        matches.first().map(taskflow::task::domain::Task::title),
        Some("Fix login validation bug")
    );
}
