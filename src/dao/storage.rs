use std::error::Error;
use thiserror::Error;

/// Result alias for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by storage backends regardless of where the collection lives.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not read or write the player collection.
    #[error("player storage failed: {message}")]
    Backend {
        message: String,
        #[source]
        source: Box<dyn Error + Send + Sync>,
    },
}

impl StorageError {
    /// Construct a backend error from any underlying failure.
    pub fn backend(message: String, source: impl Error + Send + Sync + 'static) -> Self {
        StorageError::Backend {
            message,
            source: Box::new(source),
        }
    }
}
