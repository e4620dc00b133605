//! Task list management.
//!
//! Tasks are created from validated text, toggled between active and
//! completed, and deleted. The [`services::TaskStore`] owns the list and
//! writes a full snapshot through a [`ports::SnapshotStorage`] after every
//! mutation. The module follows hexagonal architecture:
//!
//! - Domain types and pure operations in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The task store in [`services`]
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use mockable::DefaultClock;
//! use taskmaster::task::{
//!     adapters::memory::InMemorySnapshotStorage,
//!     domain::{TaskFilter, TaskValidationError},
//!     services::TaskStore,
//! };
//!
//! let storage = Arc::new(InMemorySnapshotStorage::new());
//! let mut store = TaskStore::load(Arc::clone(&storage), Arc::new(DefaultClock));
//!
//! let task = store.submit("  Buy milk ").expect("valid task");
//! assert_eq!(task.text().as_str(), "Buy milk");
//! assert_eq!(store.submit("   "), Err(TaskValidationError::EmptyTask));
//!
//! store.toggle(task.id());
//! store.set_filter(TaskFilter::Active);
//! assert!(store.visible_tasks().is_empty());
//!
//! let reloaded = TaskStore::load(storage, Arc::new(DefaultClock));
//! assert_eq!(reloaded.tasks(), store.tasks());
//! ```

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
