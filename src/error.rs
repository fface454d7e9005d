use thiserror::Error;

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("price already exists")]
    DuplicatePrice,
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store query failed: {0}")]
    Query(String),
}

impl From<libsql::Error> for StoreError {
    fn from(err: libsql::Error) -> Self {
        let message = err.to_string();
        // libsql reports constraint violations through the error text, for
        // both local and remote databases.
        if message.contains("UNIQUE constraint failed") {
            return StoreError::DuplicatePrice;
        }
        match err {
            libsql::Error::ConnectionFailed(_) => StoreError::Unavailable(message),
            _ => StoreError::Query(message),
        }
    }
}
