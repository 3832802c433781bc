//! The log handle: open, append, count, close.

use crate::error::LogError;
use crate::frame::encode_frame;
use crate::recovery;
use duralog_storage::{FileBackend, StorageBackend};
use std::path::Path;
use tracing::debug;

/// A handle to an append-only persistent log.
///
/// The handle exclusively owns its storage backend and the in-memory count
/// of valid records. Opening runs the recovery scan, which truncates any
/// trailing partial or corrupted frame before the handle is returned.
///
/// # Concurrency
///
/// Operations run synchronously in the caller's thread. A handle must not
/// be shared between concurrent writers, and two handles on the same file
/// are unsafe: the recovery scan assumes no concurrent writer mutates the
/// file mid-scan. Serialize access externally.
pub struct Log {
    backend: Option<Box<dyn StorageBackend>>,
    record_count: u64,
}

impl Log {
    /// Opens the log at `path`, creating the file if it does not exist.
    ///
    /// Runs the recovery scan and sets the record count to the number of
    /// frames that validated.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Open`] if the file cannot be created or opened,
    /// [`LogError::Read`] if it cannot be read during recovery, and
    /// [`LogError::Truncate`] if trailing invalid bytes cannot be removed.
    pub fn open(path: &Path) -> Result<Self, LogError> {
        let backend = FileBackend::open(path).map_err(LogError::Open)?;
        debug!(path = %path.display(), "opening log");
        Self::with_backend(Box::new(backend))
    }

    /// Opens a log over an arbitrary storage backend.
    ///
    /// Runs the same recovery lifecycle as [`Log::open`]. Mainly useful
    /// with [`duralog_storage::InMemoryBackend`] in tests and for ephemeral
    /// logs.
    ///
    /// # Errors
    ///
    /// Same as [`Log::open`], minus [`LogError::Open`].
    pub fn with_backend(mut backend: Box<dyn StorageBackend>) -> Result<Self, LogError> {
        let report = recovery::recover(backend.as_mut())?;
        debug!(records = report.valid_records, "log ready");
        Ok(Self {
            backend: Some(backend),
            record_count: report.valid_records,
        })
    }

    /// Appends one payload as a new record and syncs it to stable storage.
    ///
    /// Returns only after the durability barrier completes; a successful
    /// return means the record will survive a crash. The record count is
    /// incremented only on success.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::PayloadTooLarge`] if the payload exceeds the
    /// 32-bit length field, [`LogError::Write`] if the append write fails,
    /// [`LogError::Sync`] if the durability barrier fails, and
    /// [`LogError::Closed`] after [`Log::close`]. On any failure the record
    /// count is unchanged and the caller may retry or abort; a torn write
    /// left behind will be discarded by recovery on the next open.
    pub fn append(&mut self, payload: &[u8]) -> Result<(), LogError> {
        let backend = self.backend.as_mut().ok_or(LogError::Closed)?;

        let frame = encode_frame(payload)?;
        backend.append(&frame).map_err(LogError::Write)?;
        backend.sync().map_err(LogError::Sync)?;

        self.record_count += 1;
        Ok(())
    }

    /// Returns the number of records known to be durably stored and valid.
    #[must_use]
    pub fn record_count(&self) -> u64 {
        self.record_count
    }

    /// Releases the underlying storage.
    ///
    /// Idempotent; never fails observably. Subsequent appends return
    /// [`LogError::Closed`]; [`Log::record_count`] keeps returning the
    /// count as of close.
    pub fn close(&mut self) {
        self.backend = None;
    }

    /// Whether the handle has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.backend.is_none()
    }
}

impl std::fmt::Debug for Log {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Log")
            .field("record_count", &self.record_count)
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}
