//! Given steps for task list BDD scenarios.

use std::sync::Arc;

use super::world::TaskListWorld;
use rstest_bdd_macros::given;
use taskmaster::task::{adapters::memory::InMemorySnapshotStorage, services::DEFAULT_STORAGE_KEY};

#[given("an empty task list")]
fn empty_task_list(world: &mut TaskListWorld) {
    *world = TaskListWorld::new();
}

#[given("a stored list with active task {active:u64} and completed task {completed:u64}")]
fn stored_list(
    world: &mut TaskListWorld,
    active: u64,
    completed: u64,
) -> Result<(), eyre::Report> {
    let snapshot = format!(
        concat!(
            r#"[{{"id":{},"text":"active task","completed":false,"createdAt":"2024-03-01T09:30:00.000Z"}},"#,
            r#"{{"id":{},"text":"completed task","completed":true,"createdAt":"2024-03-01T09:31:00.000Z"}}]"#
        ),
        active, completed
    );
    *world = TaskListWorld::over(Arc::new(InMemorySnapshotStorage::with_snapshot(
        DEFAULT_STORAGE_KEY,
        snapshot,
    )));
    eyre::ensure!(world.store.len() == 2, "seeded snapshot did not load");
    Ok(())
}
