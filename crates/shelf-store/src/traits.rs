use shelf_types::{Record, RecordId};

use crate::error::StoreResult;

/// The record store seam.
///
/// All implementations must satisfy these invariants:
/// - Exactly one record per id; `set` with an existing id replaces the
///   prior record unconditionally.
/// - Reads return independent copies, never references into storage.
/// - Any number of readers may run concurrently; at most one writer runs
///   at a time and excludes all readers for the duration of its mutation.
/// - A snapshot is per-key atomic: no record ever appears half-mutated.
pub trait RecordStore: Send + Sync {
    /// Insert or overwrite the record under its id. Always succeeds.
    fn set(&self, record: Record) -> StoreResult<()>;

    /// Copy of the record under `id`, or `Ok(None)` when absent.
    fn get(&self, id: &RecordId) -> StoreResult<Option<Record>>;

    /// Remove and return the record under `id`.
    ///
    /// Returns [`StoreError::NotFound`] when no such record exists, so the
    /// caller can distinguish it from success.
    ///
    /// [`StoreError::NotFound`]: crate::error::StoreError::NotFound
    fn delete(&self, id: &RecordId) -> StoreResult<Record>;

    /// Independent copy of every currently stored record, consistent with
    /// a single instant. Iteration order is unspecified.
    fn snapshot(&self) -> StoreResult<Vec<Record>>;

    /// Current record count. Diagnostic only.
    fn len(&self) -> usize;

    /// Returns `true` if the store holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
