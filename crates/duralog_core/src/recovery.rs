//! Recovery scan run at open time.
//!
//! The scan walks frames from offset 0, validating each one in turn. The
//! first incomplete or checksum-failing frame ends the valid prefix; there
//! is no skip-ahead or resynchronization past a bad frame. [`recover`] then
//! truncates the file to the last valid boundary, permanently discarding
//! every byte from the first invalid frame onward.
//!
//! The scan cannot distinguish a crash mid-write of the last record from a
//! corrupted middle record followed by unrelated bytes that happen to fail
//! validation. Both are truncated identically. This is an accepted
//! limitation of the format, which carries no per-frame sequence numbers.
//!
//! The whole file is read into memory for the scan. Intended log sizes make
//! this acceptable; a log expected to grow past available memory would need
//! a streaming scan over fixed-size reads instead.

use crate::error::LogError;
use crate::frame::{decode_frame, FrameOutcome};
use duralog_storage::StorageBackend;
use tracing::{debug, warn};

/// Result of scanning a log file for valid frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanReport {
    /// Number of frames that validated, counted from the start of the file.
    pub valid_records: u64,
    /// Byte offset immediately after the last valid frame.
    pub valid_len: u64,
    /// Total file size at scan time.
    pub file_len: u64,
}

impl ScanReport {
    /// Whether every byte of the file belongs to a valid frame.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.valid_len == self.file_len
    }

    /// Number of trailing bytes not covered by valid frames.
    #[must_use]
    pub fn trailing_bytes(&self) -> u64 {
        self.file_len - self.valid_len
    }
}

/// Scans the backend for valid frames without modifying it.
///
/// Used by [`recover`] at open time and by read-only integrity checks.
///
/// # Errors
///
/// Returns [`LogError::Read`] if the size or content cannot be read.
/// Corruption is not an error; it shows up as a short `valid_len`.
pub fn scan(backend: &dyn StorageBackend) -> Result<ScanReport, LogError> {
    let file_len = backend.size().map_err(LogError::Read)?;
    let content = backend
        .read_at(0, file_len as usize)
        .map_err(LogError::Read)?;

    let mut offset = 0usize;
    let mut valid_records = 0u64;

    loop {
        match decode_frame(&content, offset) {
            FrameOutcome::Valid { next_offset, .. } => {
                offset = next_offset;
                valid_records += 1;
            }
            FrameOutcome::Incomplete | FrameOutcome::ChecksumMismatch => break,
        }
    }

    debug!(
        records = valid_records,
        valid_len = offset,
        file_len,
        "scanned log"
    );

    Ok(ScanReport {
        valid_records,
        valid_len: offset as u64,
        file_len,
    })
}

/// Scans the backend and truncates any trailing invalid bytes.
///
/// Run once per open. After this returns, the file consists solely of
/// frames that each re-validated their checksum.
///
/// # Errors
///
/// Returns [`LogError::Read`] if the scan cannot read the file and
/// [`LogError::Truncate`] if the trailing bytes cannot be removed.
pub fn recover(backend: &mut dyn StorageBackend) -> Result<ScanReport, LogError> {
    let report = scan(backend)?;

    if !report.is_clean() {
        warn!(
            discarded = report.trailing_bytes(),
            boundary = report.valid_len,
            "truncating trailing invalid bytes"
        );
        backend
            .truncate(report.valid_len)
            .map_err(|source| LogError::Truncate {
                offset: report.valid_len,
                source,
            })?;
    }

    Ok(report)
}
