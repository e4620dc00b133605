//! Identifier types for the task domain.

use chrono::{DateTime, Utc};
use std::fmt;

/// Unique identifier for a task in the list.
///
/// Identifiers are milliseconds since the Unix epoch at creation time, kept
/// strictly increasing by [`TaskIdGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a task identifier from a raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for TaskId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues unique task identifiers from clock readings.
///
/// Each identifier is the later of the current time in milliseconds and the
/// previously issued identifier plus one, so rapid successive calls within the
/// same millisecond (or a clock that steps backwards) never collide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskIdGenerator {
    last_issued: Option<TaskId>,
}

impl TaskIdGenerator {
    /// Creates a generator that has not issued any identifiers.
    #[must_use]
    pub const fn new() -> Self {
        Self { last_issued: None }
    }

    /// Creates a generator that continues after the largest existing id.
    #[must_use]
    pub fn seeded(existing: impl IntoIterator<Item = TaskId>) -> Self {
        Self {
            last_issued: existing.into_iter().max(),
        }
    }

    /// Returns the most recently issued (or seeded) identifier.
    #[must_use]
    pub const fn last_issued(&self) -> Option<TaskId> {
        self.last_issued
    }

    /// Issues the next identifier for a task created at `now`.
    ///
    /// Returns `None` once `u64::MAX` has been issued or seeded, since no
    /// larger identifier exists. The generator state is left unchanged in
    /// that case.
    pub fn next_id(&mut self, now: DateTime<Utc>) -> Option<TaskId> {
        // Pre-epoch clocks clamp to zero; monotonicity still holds.
        let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let value = match self.last_issued {
            Some(last) => millis.max(last.0.checked_add(1)?),
            None => millis,
        };
        let id = TaskId(value);
        self.last_issued = Some(id);
        Some(id)
    }
}
