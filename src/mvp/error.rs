use std::{io, path::PathBuf};

use reqwest::StatusCode;
use thiserror::Error;

/// Convenient result alias returning [`MvpError`] failures.
pub type MvpResult<T> = Result<T, MvpError>;

/// Failures that stop the MVP projection.
#[derive(Debug, Error)]
pub enum MvpError {
    /// The HTTP request could not be sent or its body could not be read.
    #[error("failed to fetch MVP document from `{url}`")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("MVP document request to `{url}` returned status {status}")]
    Status { url: String, status: StatusCode },
    /// The local document could not be read.
    #[error("failed to read MVP document `{}`", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The document is not valid JSON.
    #[error("MVP document is not valid JSON")]
    Decode {
        #[source]
        source: serde_json::Error,
    },
    /// The document is not an array or holds no record.
    #[error("MVP document must be a non-empty JSON array")]
    Empty,
    /// The first record lacks an expected field.
    #[error("current MVP record has an unexpected shape")]
    Shape {
        #[source]
        source: serde_json::Error,
    },
    /// The display surface has no region with this element id.
    #[error("display region `{0}` not found")]
    MissingRegion(&'static str),
}
