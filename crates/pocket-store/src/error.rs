//! Storage error types for pocket-store.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from key/value storage and the cart codec.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing a storage file failed.
    #[error("storage I/O at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The key cannot be mapped to a file name.
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Persisted content is not a valid record array.
    #[error("codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
