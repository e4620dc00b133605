//! Error types for task input validation and parsing.

use thiserror::Error;

/// Errors returned while validating user-entered task text.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The text is empty after trimming.
    #[error("task cannot be empty")]
    EmptyTask,

    /// The trimmed text exceeds the maximum length.
    #[error("task is too long ({length} characters, max {max})")]
    TooLong {
        /// Length of the trimmed text in characters.
        length: usize,
        /// Maximum permitted length in characters.
        max: usize,
    },
}

/// Error returned while parsing a task filter from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task filter: {0}")]
pub struct ParseTaskFilterError(pub String);
