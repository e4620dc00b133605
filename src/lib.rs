//! Taskmaster: task list state management with durable persistence.
//!
//! The crate owns a to-do list: users add short text tasks, mark them
//! complete, delete them, and filter the visible list by status. The full
//! list is written to durable storage after every change and reloaded on
//! start-up.
//!
//! # Architecture
//!
//! Taskmaster follows hexagonal architecture principles:
//!
//! - **Domain**: Pure validation and filtering with no storage dependencies
//! - **Ports**: Abstract trait interfaces for snapshot storage
//! - **Adapters**: Concrete storage implementations (memory, filesystem)
//!
//! # Modules
//!
//! - [`task`]: Task model, validation, filtering, and the persisted store

pub mod task;
