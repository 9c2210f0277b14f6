use std::sync::Arc;

use shelf_store::{InMemoryRecordStore, RecordStore};

/// Shared state handed to every request handler.
///
/// The store is the only shared mutable resource in the system; handlers
/// reach it exclusively through the [`RecordStore`] seam.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRecordStore::new()))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("records", &self.store.len())
            .finish()
    }
}
