//! Deterministic demo task generation.
//!
//! Useful for seeding development boards and exercising views in tests
//! without hand-writing fixtures.

use mockable::Clock;

use super::{BoardId, Column, NewTaskData, Priority, Task, TaskId};

const SAMPLE_TITLES: [&str; 6] = [
    "Implement user authentication",
    "Create dashboard layout",
    "Fix login validation bug",
    "Add dark mode support",
    "Refactor API client",
    "Write unit tests",
];

const SAMPLE_DESCRIPTIONS: [&str; 6] = [
    "Implement JWT-based authentication with refresh tokens",
    "Create a responsive dashboard with charts and metrics",
    "Fix issue where validation errors are not displayed",
    "Add support for dark mode across all components",
    "Refactor the API client to reduce duplication",
    "Write comprehensive unit tests for the storage layer",
];

const PRIORITY_CYCLE: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

/// Generates up to six demo tasks for `board_id`, cycling through columns and
/// priorities so every lane has content.
///
/// Identifiers are stable (`sample-1` onward), so repeated generation for the
/// same board produces the same ids.
#[must_use]
pub fn sample_tasks(board_id: &BoardId, count: usize, clock: &impl Clock) -> Vec<Task> {
    let columns = Column::ALL.iter().copied().cycle();
    let priorities = PRIORITY_CYCLE.iter().copied().cycle();

    SAMPLE_TITLES
        .iter()
        .zip(SAMPLE_DESCRIPTIONS.iter())
        .zip(columns.zip(priorities))
        .take(count.min(SAMPLE_TITLES.len()))
        .enumerate()
        .filter_map(|(index, ((title, description), (column, priority)))| {
            let id = TaskId::new(format!("sample-{}", index + 1)).ok()?;
            Some(Task::create(
                NewTaskData {
                    id,
                    board_id: board_id.clone(),
                    title: (*title).to_owned(),
                    description: Some((*description).to_owned()),
                    assignee: None,
                    priority,
                    column,
                },
                clock,
            ))
        })
        .collect()
}
