//! Storage backend trait definition.

use crate::error::StorageResult;

/// A low-level storage backend for duralog.
///
/// Storage backends are **opaque byte stores**. They provide simple
/// operations for reading, appending, syncing and truncating bytes. The log
/// owns all frame-format interpretation - backends never see record
/// boundaries or checksums.
///
/// # Invariants
///
/// - `append` returns the offset where data was written
/// - `read_at` returns exactly the bytes previously written at that offset
/// - `sync` ensures all appended data survives process termination
/// - `truncate` removes bytes from the tail only, never the middle
///
/// # Implementors
///
/// - [`super::FileBackend`] - For persistent storage
/// - [`super::InMemoryBackend`] - For testing
pub trait StorageBackend: Send + Sync {
    /// Reads `len` bytes starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if the read would extend beyond the current size or
    /// an I/O error occurs.
    fn read_at(&self, offset: u64, len: usize) -> StorageResult<Vec<u8>>;

    /// Appends data to the end of the storage.
    ///
    /// Returns the offset where the data was written.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O error occurs.
    fn append(&mut self, data: &[u8]) -> StorageResult<u64>;

    /// Returns the current size of the storage in bytes.
    ///
    /// This is the offset where the next `append` will write.
    ///
    /// # Errors
    ///
    /// Returns an error if the size cannot be determined.
    fn size(&self) -> StorageResult<u64>;

    /// Syncs all data and metadata to durable storage.
    ///
    /// After this returns successfully, all previously appended data is
    /// guaranteed to survive process termination.
    ///
    /// # Errors
    ///
    /// Returns an error if the sync operation fails.
    fn sync(&mut self) -> StorageResult<()>;

    /// Truncates the storage to the given size.
    ///
    /// This removes all data after the specified offset. Used by recovery
    /// to discard a trailing partial or corrupted frame.
    ///
    /// # Errors
    ///
    /// Returns an error if the truncation fails or `new_size` is greater
    /// than the current size.
    fn truncate(&mut self, new_size: u64) -> StorageResult<()>;
}
