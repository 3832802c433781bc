//! # duralog storage
//!
//! Storage backend trait and implementations for duralog.
//!
//! This crate provides the lowest-level storage abstraction for the log.
//! Backends are **opaque byte stores** - they do not interpret the data
//! they hold. All frame-format knowledge lives in `duralog_core`.
//!
//! ## Available Backends
//!
//! - [`FileBackend`] - Persistent storage over an append-positioned file
//! - [`InMemoryBackend`] - For testing and ephemeral logs
//!
//! ## Example
//!
//! ```rust
//! use duralog_storage::{StorageBackend, InMemoryBackend};
//!
//! let mut backend = InMemoryBackend::new();
//! let offset = backend.append(b"hello world").unwrap();
//! let data = backend.read_at(offset, 11).unwrap();
//! assert_eq!(&data, b"hello world");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod file;
mod memory;

pub use backend::StorageBackend;
pub use error::{StorageError, StorageResult};
pub use file::FileBackend;
pub use memory::InMemoryBackend;
