//! Then steps for task list BDD scenarios.

use super::world::TaskListWorld;
use rstest_bdd_macros::then;
use taskmaster::task::domain::{Task, TaskValidationError};

fn last_task(world: &TaskListWorld) -> Result<&Task, eyre::Report> {
    world
        .store
        .tasks()
        .last()
        .ok_or_else(|| eyre::eyre!("task list is empty"))
}

#[then("the list holds {count:usize} tasks")]
fn list_holds(world: &TaskListWorld, count: usize) -> Result<(), eyre::Report> {
    let found = world.store.len();
    eyre::ensure!(found == count, "expected {count} tasks, found {found}");
    Ok(())
}

#[then(r#"the last task has text "{text}""#)]
fn last_task_has_text(world: &TaskListWorld, text: String) -> Result<(), eyre::Report> {
    let task = last_task(world)?;
    eyre::ensure!(
        task.text().as_str() == text,
        "expected text '{text}', found '{}'",
        task.text()
    );
    Ok(())
}

#[then("the last task is active")]
fn last_task_is_active(world: &TaskListWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(!last_task(world)?.is_completed(), "task is completed");
    Ok(())
}

#[then("the last task is completed")]
fn last_task_is_completed(world: &TaskListWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(last_task(world)?.is_completed(), "task is still active");
    Ok(())
}

#[then("the submission is rejected as empty")]
fn rejected_as_empty(world: &TaskListWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_submission
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing submission result"))?;
    if !matches!(result, Err(TaskValidationError::EmptyTask)) {
        return Err(eyre::eyre!("expected EmptyTask error, got {result:?}"));
    }
    Ok(())
}

#[then("the submission is rejected as too long")]
fn rejected_as_too_long(world: &TaskListWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_submission
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing submission result"))?;
    if !matches!(result, Err(TaskValidationError::TooLong { .. })) {
        return Err(eyre::eyre!("expected TooLong error, got {result:?}"));
    }
    Ok(())
}

#[then(r#"the visible task ids are "{ids}""#)]
fn visible_task_ids(world: &TaskListWorld, ids: String) -> Result<(), eyre::Report> {
    let expected = ids
        .split(',')
        .map(|id| id.trim().parse::<u64>())
        .collect::<Result<Vec<_>, _>>()?;
    let visible: Vec<u64> = world
        .store
        .visible_tasks()
        .iter()
        .map(|task| task.id().value())
        .collect();
    eyre::ensure!(
        visible == expected,
        "expected visible ids {expected:?}, found {visible:?}"
    );
    Ok(())
}

#[then("the stored snapshot is unchanged")]
fn stored_snapshot_unchanged(world: &TaskListWorld) -> Result<(), eyre::Report> {
    let before = world
        .snapshot_before_action
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no snapshot captured before the action"))?;
    let after = world.stored_snapshot();
    eyre::ensure!(
        after.as_ref() == Some(before),
        "snapshot changed from {before} to {after:?}"
    );
    Ok(())
}
