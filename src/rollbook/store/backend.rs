use crate::error::Result;

/// Durable key-value storage underneath the record store.
///
/// This trait handles the "how" of persistence (filesystem vs memory), while
/// [`RecordStore`](super::RecordStore) handles the "what": the ordered collection,
/// theme preference and the commit discipline.
pub trait StorageBackend {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) if nothing has been written yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}
