//! # duralog core
//!
//! A minimal append-only persistent log. Callers append opaque byte
//! payloads; each payload is framed on disk with a checksum and a length.
//! On open, the log validates its own content from offset 0 and truncates
//! any trailing partial or corrupted frame left by a crash.
//!
//! ## Frame Format
//!
//! ```text
//! | checksum (8, XXH64 big-endian) | length (4, big-endian) | payload (N) |
//! ```
//!
//! There is no file header, footer, or version marker - the file is a flat
//! concatenation of frames.
//!
//! ## Durability Contract
//!
//! [`Log::append`] returns only after the frame has been written and synced
//! to stable storage. If the process crashes mid-write, the recovery scan on
//! the next open discards the incomplete tail, so every record the log ever
//! reported as counted is durable.
//!
//! ## Example
//!
//! ```no_run
//! use duralog_core::Log;
//! use std::path::Path;
//!
//! let mut log = Log::open(Path::new("records.log")).unwrap();
//! log.append(b"hello").unwrap();
//! assert_eq!(log.record_count(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod frame;
mod log;
mod recovery;

pub use error::{LogError, LogResult};
pub use frame::{decode_frame, encode_frame, FrameOutcome, HEADER_SIZE};
pub use log::Log;
pub use recovery::{recover, scan, ScanReport};

/// Current version of duralog.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
