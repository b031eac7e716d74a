use std::path::PathBuf;

use thiserror::Error;

use crate::normalize::NormalizeError;
use crate::value::Kind;

/// Failures of a path write.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// An intermediate segment holds something other than an object.
    #[error("{segment} is not a json object (found {found})")]
    NotAnObject { segment: String, found: Kind },
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("expected a json object, found {found}")]
    NotAnObject { found: Kind },
    #[error("expected an array of json objects")]
    NotAnArrayOfObjects,
    #[error("value cannot be normalized: {0}")]
    Normalize(#[from] NormalizeError),
}
