//! Task store: the authoritative task list and its persistence round-trip.

use std::{collections::HashSet, sync::Arc};

use mockable::Clock;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::StoreConfig;
use crate::task::{
    adapters::codec::{self, SnapshotCodecError},
    domain::{
        Task, TaskFilter, TaskId, TaskIdGenerator, TaskText, TaskValidationError, filter_tasks,
        validate,
    },
    ports::{SnapshotStorage, SnapshotStorageError},
};

/// Errors returned when writing the task list to storage.
#[derive(Debug, Error)]
pub enum TaskStoreError {
    /// The task list could not be encoded.
    #[error(transparent)]
    Codec(#[from] SnapshotCodecError),
    /// The storage adapter rejected the write.
    #[error(transparent)]
    Storage(#[from] SnapshotStorageError),
}

/// Result type for task store persistence.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Number of tasks visible under each filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskCounts {
    /// Every task.
    pub all: usize,
    /// Tasks not yet completed.
    pub active: usize,
    /// Completed tasks.
    pub completed: usize,
}

impl TaskCounts {
    /// Returns the count for `filter`.
    #[must_use]
    pub const fn for_filter(self, filter: TaskFilter) -> usize {
        match filter {
            TaskFilter::All => self.all,
            TaskFilter::Active => self.active,
            TaskFilter::Completed => self.completed,
        }
    }
}

/// Owns the task list, the current filter, and the storage round-trip.
///
/// Every mutation persists the full list. Write failures are logged and
/// never surfaced from mutators; call [`TaskStore::persist`] directly to
/// observe them.
pub struct TaskStore<S, C>
where
    S: SnapshotStorage,
    C: Clock,
{
    storage: Arc<S>,
    clock: Arc<C>,
    config: StoreConfig,
    tasks: Vec<Task>,
    filter: TaskFilter,
    ids: TaskIdGenerator,
}

impl<S, C> TaskStore<S, C>
where
    S: SnapshotStorage,
    C: Clock,
{
    /// Loads the task list from the default storage slot.
    ///
    /// See [`TaskStore::load_with_config`].
    #[must_use]
    pub fn load(storage: Arc<S>, clock: Arc<C>) -> Self {
        Self::load_with_config(storage, clock, StoreConfig::default())
    }

    /// Loads the task list from the slot named in `config`.
    ///
    /// A missing snapshot yields an empty list. Unreadable or malformed
    /// snapshots are discarded with a warning and also yield an empty list.
    #[must_use]
    pub fn load_with_config(storage: Arc<S>, clock: Arc<C>, config: StoreConfig) -> Self {
        let tasks = read_snapshot(&*storage, &config.storage_key);
        let ids = TaskIdGenerator::seeded(tasks.iter().map(Task::id));
        Self {
            storage,
            clock,
            config,
            tasks,
            filter: TaskFilter::default(),
            ids,
        }
    }

    /// Appends a new incomplete task and persists the list.
    ///
    /// Ids follow the clock. Once the largest possible id is in use, the
    /// lowest unused id is issued instead.
    pub fn add(&mut self, text: TaskText) -> Task {
        let now = self.clock.utc();
        let id = match self.ids.next_id(now) {
            Some(id) => id,
            None => {
                let id = self.lowest_unused_id();
                warn!(task_id = %id, "task ids exhausted, reusing lowest free id");
                id
            }
        };
        let task = Task::new(id, text, now);
        self.tasks.push(task.clone());
        info!(task_id = %id, "task added");
        self.persist_after_mutation();
        task
    }

    /// Validates raw input and adds it as a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError`] when the input is empty or too long.
    /// The list is left untouched and nothing is persisted.
    pub fn submit(&mut self, raw: &str) -> Result<Task, TaskValidationError> {
        let text = validate(raw)?;
        Ok(self.add(text))
    }

    /// Flips the completion flag of the task with `id` and persists the list.
    ///
    /// Returns `false`, leaving the list unchanged, when no task has `id`.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        let toggled = self
            .tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .map(|task| {
                task.toggle();
                task.is_completed()
            });
        match toggled {
            Some(completed) => info!(task_id = %id, completed, "task toggled"),
            None => debug!(task_id = %id, "toggle ignored, no such task"),
        }
        self.persist_after_mutation();
        toggled.is_some()
    }

    /// Removes the task with `id` and persists the list.
    ///
    /// Returns `false`, leaving the list unchanged, when no task has `id`.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id() != id);
        let removed = self.tasks.len() != before;
        if removed {
            info!(task_id = %id, "task deleted");
        } else {
            debug!(task_id = %id, "delete ignored, no such task");
        }
        self.persist_after_mutation();
        removed
    }

    /// Writes the full task list to storage, replacing any previous snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError`] when encoding or the storage write fails.
    pub fn persist(&self) -> TaskStoreResult<()> {
        let snapshot = codec::encode(&self.tasks)?;
        self.storage.write(&self.config.storage_key, &snapshot)?;
        debug!(
            storage_key = %self.config.storage_key,
            count = self.tasks.len(),
            "persisted task list"
        );
        Ok(())
    }

    /// Returns every task in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the task with `id`, if present.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the current filter.
    #[must_use]
    pub const fn filter(&self) -> TaskFilter {
        self.filter
    }

    /// Changes the current filter. Nothing is persisted.
    pub const fn set_filter(&mut self, filter: TaskFilter) {
        self.filter = filter;
    }

    /// Returns the tasks visible under the current filter.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        filter_tasks(&self.tasks, self.filter)
    }

    /// Returns task counts for every filter.
    #[must_use]
    pub fn counts(&self) -> TaskCounts {
        let completed = self.tasks.iter().filter(|task| task.is_completed()).count();
        TaskCounts {
            all: self.tasks.len(),
            active: self.tasks.len() - completed,
            completed,
        }
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the storage adapter.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn lowest_unused_id(&self) -> TaskId {
        let used: HashSet<TaskId> = self.tasks.iter().map(Task::id).collect();
        // Terminates: the list holds fewer than `u64::MAX` tasks.
        let mut candidate = 0_u64;
        while used.contains(&TaskId::new(candidate)) {
            candidate += 1;
        }
        TaskId::new(candidate)
    }

    fn persist_after_mutation(&self) {
        if let Err(err) = self.persist() {
            warn!(
                storage_key = %self.config.storage_key,
                error = %err,
                "failed to persist task list"
            );
        }
    }
}

fn read_snapshot(storage: &impl SnapshotStorage, key: &str) -> Vec<Task> {
    let snapshot = match storage.read(key) {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) => {
            debug!(storage_key = key, "no task snapshot found");
            return Vec::new();
        }
        Err(err) => {
            warn!(storage_key = key, error = %err, "failed to read task snapshot");
            return Vec::new();
        }
    };

    match codec::decode(&snapshot) {
        Ok(tasks) => {
            debug!(storage_key = key, count = tasks.len(), "loaded task snapshot");
            tasks
        }
        Err(err) => {
            warn!(storage_key = key, error = %err, "discarding malformed task snapshot");
            Vec::new()
        }
    }
}
