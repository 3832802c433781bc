//! Error types for log operations.

use duralog_storage::StorageError;
use thiserror::Error;

/// Result type for log operations.
pub type LogResult<T> = Result<T, LogError>;

/// Errors that can occur in log operations.
///
/// Corruption found during the recovery scan is deliberately absent here:
/// a trailing bad frame is the expected signal that recovery should stop
/// and truncate, and it is handled internally without surfacing to the
/// caller of [`crate::Log::open`].
#[derive(Debug, Error)]
pub enum LogError {
    /// The log file could not be created or opened.
    #[error("could not open log file: {0}")]
    Open(#[source] StorageError),

    /// The log content could not be read during the recovery scan.
    #[error("could not read log during recovery: {0}")]
    Read(#[source] StorageError),

    /// The log could not be truncated to the last valid frame boundary.
    #[error("could not truncate log to {offset} bytes: {source}")]
    Truncate {
        /// The boundary the truncation targeted.
        offset: u64,
        /// The underlying storage failure.
        #[source]
        source: StorageError,
    },

    /// The append write failed. The record count was not incremented.
    #[error("append write failed: {0}")]
    Write(#[source] StorageError),

    /// The sync to stable storage failed. The record count was not
    /// incremented; the record may or may not be on disk and will be
    /// validated by the next recovery scan.
    #[error("sync to durable storage failed: {0}")]
    Sync(#[source] StorageError),

    /// The payload is too large for the frame's 32-bit length field.
    #[error("payload of {len} bytes exceeds the 32-bit length field")]
    PayloadTooLarge {
        /// The rejected payload length.
        len: usize,
    },

    /// The log handle has been closed.
    #[error("log is closed")]
    Closed,
}
