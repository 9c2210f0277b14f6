use shelf_types::RecordId;

/// Errors from record store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No record exists under the given id.
    #[error("record not found: {0}")]
    NotFound(RecordId),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
