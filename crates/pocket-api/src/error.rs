//! API client error types.

use thiserror::Error;

/// Errors raised while talking to the dashboard backend or the chat host.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport error (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, or the status reason when the body is empty.
        message: String,
    },

    /// The body did not match the endpoint's schema.
    #[error("unexpected response from {endpoint}: {reason}")]
    Parse {
        endpoint: &'static str,
        reason: String,
    },

    /// The client has no base URL to call.
    #[error(transparent)]
    NotConfigured(#[from] pocket_config::ConfigError),
}

impl ApiError {
    /// Message shown to the user: the server's own text for API errors.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
