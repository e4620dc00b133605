//! Adapter implementations for task persistence.
//!
//! - [`memory`]: in-process snapshot storage for tests and embedding
//! - [`file`]: durable snapshot storage on the local filesystem
//! - [`codec`]: the JSON snapshot format shared by every adapter

pub mod codec;
pub mod file;
pub mod memory;
