//! Domain model for the task list.
//!
//! Tasks, their validated text, identifiers, and the status filter live here
//! together with the pure operations that validate input and derive the
//! visible view. Nothing in this module touches storage.

mod error;
mod filter;
mod ids;
mod task;
mod text;

pub use error::{ParseTaskFilterError, TaskValidationError};
pub use filter::{TaskFilter, filter_tasks};
pub use ids::{TaskId, TaskIdGenerator};
pub use task::{PersistedTaskData, Task};
pub use text::{MAX_TASK_TEXT_LENGTH, TaskText, validate};
