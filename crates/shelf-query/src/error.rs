/// Errors from list-query parsing.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The ordering clause does not end in `:asc` or `:desc`.
    #[error("invalid ordering {0:?}: allowed directions are `:asc` and `:desc`")]
    InvalidOrdering(String),
}

/// Result alias for query operations.
pub type QueryResult<T> = Result<T, QueryError>;
