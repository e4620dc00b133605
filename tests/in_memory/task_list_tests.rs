//! In-memory integration tests for task list operations.

use std::sync::Arc;

use super::helpers::{add_all, instant, open_store, storage};
use chrono::{DateTime, Utc};
use rstest::rstest;
use taskmaster::task::{
    adapters::memory::InMemorySnapshotStorage,
    domain::{TaskFilter, TaskId, TaskValidationError},
};

#[rstest]
fn add_to_empty_list_yields_single_incomplete_task(
    storage: Arc<InMemorySnapshotStorage>,
    instant: DateTime<Utc>,
) {
    let mut store = open_store(&storage, instant);

    let task = store.submit("Buy milk").expect("valid task");

    assert_eq!(store.len(), 1);
    assert_eq!(task.text().as_str(), "Buy milk");
    assert!(!task.is_completed());
    assert_eq!(task.created_at(), instant);
}

#[rstest]
fn empty_and_overlong_input_leave_list_empty(
    storage: Arc<InMemorySnapshotStorage>,
    instant: DateTime<Utc>,
) {
    let mut store = open_store(&storage, instant);

    assert_eq!(store.submit(""), Err(TaskValidationError::EmptyTask));
    assert!(matches!(
        store.submit(&"z".repeat(101)),
        Err(TaskValidationError::TooLong { .. })
    ));
    assert!(store.is_empty());
}

#[rstest]
fn rapid_adds_with_frozen_clock_get_distinct_ids(
    storage: Arc<InMemorySnapshotStorage>,
    instant: DateTime<Utc>,
) -> Result<(), eyre::Report> {
    let mut store = open_store(&storage, instant);
    add_all(&mut store, &["a", "b", "c", "d", "e"])?;

    let ids: Vec<TaskId> = store.tasks().iter().map(|task| task.id()).collect();
    let strictly_increasing = ids
        .windows(2)
        .all(|pair| matches!(pair, [earlier, later] if earlier < later));
    eyre::ensure!(strictly_increasing, "ids not unique and increasing: {ids:?}");
    Ok(())
}

#[rstest]
fn toggle_and_delete_compose_with_filters(
    storage: Arc<InMemorySnapshotStorage>,
    instant: DateTime<Utc>,
) -> Result<(), eyre::Report> {
    let mut store = open_store(&storage, instant);
    add_all(&mut store, &["write report", "call bank", "book flights"])?;
    let ids: Vec<TaskId> = store.tasks().iter().map(|task| task.id()).collect();
    let [report, bank, flights] = ids.as_slice() else {
        return Err(eyre::eyre!("expected three tasks, found {}", ids.len()));
    };

    eyre::ensure!(store.toggle(*report), "report should toggle");
    eyre::ensure!(store.delete(*bank), "bank should be deleted");

    store.set_filter(TaskFilter::Active);
    let active: Vec<TaskId> = store.visible_tasks().iter().map(|task| task.id()).collect();
    eyre::ensure!(active == vec![*flights], "unexpected active tasks {active:?}");

    store.set_filter(TaskFilter::Completed);
    let completed: Vec<TaskId> = store.visible_tasks().iter().map(|task| task.id()).collect();
    eyre::ensure!(completed == vec![*report], "unexpected completed tasks {completed:?}");

    store.set_filter(TaskFilter::All);
    eyre::ensure!(store.visible_tasks().len() == 2, "expected two tasks in total");
    Ok(())
}
