use std::collections::HashMap;
use std::sync::RwLock;

use shelf_types::{Record, RecordId};

use crate::error::{StoreError, StoreResult};
use crate::traits::RecordStore;

/// In-memory, HashMap-based record store.
///
/// All records are held in memory behind a `RwLock`: readers share the lock,
/// writers take it exclusively. Records are cloned on the way in and on the
/// way out, so no caller ever aliases stored state.
pub struct InMemoryRecordStore {
    records: RwLock<HashMap<RecordId, Record>>,
}

impl InMemoryRecordStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Remove all records from the store.
    pub fn clear(&self) {
        self.records.write().expect("lock poisoned").clear();
    }

    /// Return a sorted list of all record ids in the store.
    pub fn all_ids(&self) -> Vec<RecordId> {
        let map = self.records.read().expect("lock poisoned");
        let mut ids: Vec<RecordId> = map.keys().cloned().collect();
        ids.sort();
        ids
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn set(&self, record: Record) -> StoreResult<()> {
        let mut map = self.records.write().expect("lock poisoned");
        map.insert(record.id.clone(), record);
        tracing::debug!(count = map.len(), "record stored");
        Ok(())
    }

    fn get(&self, id: &RecordId) -> StoreResult<Option<Record>> {
        let map = self.records.read().expect("lock poisoned");
        Ok(map.get(id).cloned())
    }

    fn delete(&self, id: &RecordId) -> StoreResult<Record> {
        let mut map = self.records.write().expect("lock poisoned");
        let removed = map
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        tracing::debug!(id = %removed.id, "record deleted");
        Ok(removed)
    }

    fn snapshot(&self) -> StoreResult<Vec<Record>> {
        // One read-lock acquisition for the whole copy: the snapshot is
        // consistent with a single instant from the writers' perspective.
        let map = self.records.read().expect("lock poisoned");
        Ok(map.values().cloned().collect())
    }

    fn len(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }
}

impl std::fmt::Debug for InMemoryRecordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.len();
        f.debug_struct("InMemoryRecordStore")
            .field("record_count", &count)
            .finish()
    }
}
