//! Export error types.

use std::path::PathBuf;
use std::time::Duration;

use pocket_api::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// `run` was called with no matching records; the job stays idle.
    #[error("no insights selected for export")]
    NothingSelected,

    /// A live card could not be re-fetched.
    #[error("re-fetch failed: {0}")]
    Api(#[from] ApiError),

    /// A snapshot card's `data` does not have the shape its kind requires.
    #[error("malformed payload for {kind}: {source}")]
    Payload {
        kind: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("workbook error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),

    #[error("cannot write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The build did not finish before the deadline.
    #[error("export timed out after {}s", .0.as_secs_f64())]
    TimedOut(Duration),
}

impl ExportError {
    pub(crate) fn payload(kind: &str, source: serde_json::Error) -> Self {
        Self::Payload {
            kind: kind.to_string(),
            source,
        }
    }
}
