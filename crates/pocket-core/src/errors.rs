//! Cross-cutting error types for Insight Pocket.
//!
//! Domain-specific errors (`ApiError`, `StorageError`, `ExportError`) are
//! defined in their respective crates. They converge into `anyhow` in
//! `pocket-cli`.

use thiserror::Error;

/// Errors that can be raised by any pocket crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A closed tag set received a value outside the set.
    #[error("Unknown {field}: {value}")]
    UnknownTag { field: &'static str, value: String },

    /// Data failed validation (schema, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    pub(crate) fn unknown(field: &'static str, value: &str) -> Self {
        Self::UnknownTag {
            field,
            value: value.to_string(),
        }
    }
}
