use blobd_types::ObjectId;

/// Errors from object store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A record already exists for this (repository, oid) key.
    #[error("duplicate object {oid} in repository {repository}")]
    Duplicate { repository: String, oid: ObjectId },

    /// No record exists for this (repository, oid) key.
    #[error("object {oid} not found in repository {repository}")]
    NotFound { repository: String, oid: ObjectId },

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
