//! JSON snapshot format for persisted task lists.
//!
//! A snapshot is a JSON array of objects with the fields `id` (number),
//! `text` (string), `completed` (boolean), and `createdAt` (RFC 3339 string).
//! Timestamps are written in UTC with millisecond precision and a `Z`
//! suffix; any RFC 3339 timestamp is accepted on read.

use std::collections::HashSet;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::task::domain::{PersistedTaskData, Task, TaskId, TaskText, TaskValidationError};

/// Wire representation of a single task.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredTask {
    id: u64,
    text: String,
    completed: bool,
    created_at: String,
}

impl From<&Task> for StoredTask {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            text: task.text().as_str().to_owned(),
            completed: task.is_completed(),
            created_at: format_timestamp(task.created_at()),
        }
    }
}

impl StoredTask {
    fn into_task(self) -> Result<Task, SnapshotCodecError> {
        let id = TaskId::new(self.id);
        let text = TaskText::new(&self.text)
            .map_err(|source| SnapshotCodecError::InvalidText { id, source })?;
        let created_at = match parse_timestamp(&self.created_at) {
            Ok(created_at) => created_at,
            Err(source) => {
                return Err(SnapshotCodecError::InvalidTimestamp {
                    id,
                    value: self.created_at,
                    source,
                });
            }
        };

        Ok(Task::from_persisted(PersistedTaskData {
            id,
            text,
            completed: self.completed,
            created_at,
        }))
    }
}

/// Errors raised while encoding or decoding a snapshot.
#[derive(Debug, Error)]
pub enum SnapshotCodecError {
    /// The snapshot is not a JSON array of task objects.
    #[error("malformed task snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A stored timestamp could not be parsed.
    #[error("invalid timestamp '{value}' for task {id}: {source}")]
    InvalidTimestamp {
        /// Identifier of the offending task.
        id: TaskId,
        /// Raw timestamp text.
        value: String,
        /// Parse failure.
        source: chrono::ParseError,
    },

    /// Stored task text violates the text invariants.
    #[error("invalid text for task {id}: {source}")]
    InvalidText {
        /// Identifier of the offending task.
        id: TaskId,
        /// Validation failure.
        source: TaskValidationError,
    },

    /// Two stored tasks share an identifier.
    #[error("duplicate task identifier in snapshot: {0}")]
    DuplicateId(TaskId),
}

/// Serializes the full task list into snapshot text.
///
/// # Errors
///
/// Returns [`SnapshotCodecError::Malformed`] if JSON serialization fails.
pub fn encode(tasks: &[Task]) -> Result<String, SnapshotCodecError> {
    let records: Vec<StoredTask> = tasks.iter().map(StoredTask::from).collect();
    Ok(serde_json::to_string(&records)?)
}

/// Parses snapshot text back into a task list, preserving order.
///
/// # Errors
///
/// Returns [`SnapshotCodecError`] when the JSON is malformed, a task carries
/// invalid text or an unparsable timestamp, or identifiers repeat.
pub fn decode(snapshot: &str) -> Result<Vec<Task>, SnapshotCodecError> {
    let records: Vec<StoredTask> = serde_json::from_str(snapshot)?;
    let mut seen = HashSet::with_capacity(records.len());
    let mut tasks = Vec::with_capacity(records.len());
    for record in records {
        let task = record.into_task()?;
        if !seen.insert(task.id()) {
            return Err(SnapshotCodecError::DuplicateId(task.id()));
        }
        tasks.push(task);
    }
    Ok(tasks)
}

/// Formats a timestamp in the snapshot's canonical form.
#[must_use]
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Parses an RFC 3339 timestamp and normalises it to UTC.
///
/// # Errors
///
/// Returns [`chrono::ParseError`] when `value` is not valid RFC 3339.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(value).map(|timestamp| timestamp.with_timezone(&Utc))
}
