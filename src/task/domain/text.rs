//! Validated task text and the input validation operation.

use super::TaskValidationError;
use std::fmt;

/// Maximum task text length in characters, measured after trimming.
pub const MAX_TASK_TEXT_LENGTH: usize = 100;

/// Trimmed, non-empty task text of at most [`MAX_TASK_TEXT_LENGTH`]
/// characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskText(String);

impl TaskText {
    /// Creates validated task text.
    ///
    /// # Errors
    ///
    /// See [`validate`].
    pub fn new(raw: impl AsRef<str>) -> Result<Self, TaskValidationError> {
        validate(raw.as_ref())
    }

    /// Returns the text as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value and returns the owned text.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for TaskText {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TaskText {
    type Error = TaskValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(&value)
    }
}

impl From<TaskText> for String {
    fn from(value: TaskText) -> Self {
        value.0
    }
}

/// Validates raw task input.
///
/// Surrounding whitespace is trimmed and length is counted in characters
/// (Unicode scalar values) on the trimmed result.
///
/// # Errors
///
/// Returns [`TaskValidationError::EmptyTask`] when nothing remains after
/// trimming, or [`TaskValidationError::TooLong`] when the trimmed text is
/// longer than [`MAX_TASK_TEXT_LENGTH`] characters.
pub fn validate(raw: &str) -> Result<TaskText, TaskValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyTask);
    }

    let length = trimmed.chars().count();
    if length > MAX_TASK_TEXT_LENGTH {
        return Err(TaskValidationError::TooLong {
            length,
            max: MAX_TASK_TEXT_LENGTH,
        });
    }

    Ok(TaskText(trimmed.to_owned()))
}
