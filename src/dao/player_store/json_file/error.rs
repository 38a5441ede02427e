//! Error types raised by the JSON document storage implementation.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Convenient result alias returning [`JsonFileError`] failures.
pub type JsonFileResult<T> = Result<T, JsonFileError>;

/// Failures that can occur while reading or writing the players document.
#[derive(Debug, Error)]
pub enum JsonFileError {
    /// The document exists but could not be read.
    #[error("failed to read players document `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The document content is not valid JSON.
    #[error("failed to decode players document `{}`", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The collection could not be serialized.
    #[error("failed to encode players document `{}`", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Writing the staging file failed.
    #[error("failed to write staging file `{}`", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Moving the staging file over the document failed.
    #[error("failed to replace players document `{}`", path.display())]
    Replace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
