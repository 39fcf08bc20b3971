//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment could not merge or extract a layer.
    #[error("Configuration error: {0}")]
    Figment(#[from] figment::Error),

    /// A section the command needs is missing its required fields.
    #[error("[{section}] is not configured: set {env_hint} or add it to .pocket/config.toml")]
    NotConfigured {
        section: &'static str,
        env_hint: &'static str,
    },

    /// A field parsed but fails a range or format check.
    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
