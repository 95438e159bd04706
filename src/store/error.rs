/// Errors that can occur while accessing a property store
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error creating or removing the backing directory
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from the embedded LMDB environment (e.g. map full, key too long)
    #[error("LMDB error: {0}")]
    BackendError(#[from] heed3::Error),

    /// The store was closed
    #[error("Property store is closed")]
    Closed,

    /// The store configuration cannot be used
    #[error("Invalid store configuration: {0}")]
    InvalidConfig(String),
}
