use std::path::PathBuf;

use pocket_api::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("failed to write report {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The message has no attached data to build a report from.
    #[error("no report available for this message")]
    NoReport,
}

impl ChatError {
    /// Text shown in the conversation when the error is swallowed.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}
