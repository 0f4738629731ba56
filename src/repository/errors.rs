use thiserror::Error;

/// Errors surfaced by the content store repository.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport-level failure reaching the store. Fatal for the request.
    #[error("content store unavailable: {0}")]
    Unavailable(String),
    /// The store rejected the query or returned an undecodable response.
    /// Indicates a query-builder defect; should not occur in normal operation.
    #[error("content store rejected the query: {0}")]
    Query(String),
    /// A returned document lacks a required field or carries an invalid value.
    #[error("malformed document: {0}")]
    MalformedDocument(String),
}

/// Convenient alias for results returned from repository functions.
pub type StoreResult<T> = Result<T, StoreError>;
