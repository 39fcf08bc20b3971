//! Shared HTTP response helpers.
//!
//! Every endpoint goes through [`check_response`] for status handling and
//! through [`parse_body`] / [`parse_envelope`] for schema validation, so a
//! contract drift surfaces as [`ApiError::Parse`] naming the endpoint.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Backend envelope: `{ "result": ... }`.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    result: T,
}

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success. Otherwise the error message is
/// the response body, or `fallback` (the status reason when `None`) if the
/// body is empty or unreadable.
pub async fn check_response(
    resp: reqwest::Response,
    fallback: Option<&str>,
) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        fallback
            .or_else(|| status.canonical_reason())
            .unwrap_or("request failed")
            .to_string()
    } else {
        body
    };
    Err(ApiError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Parse a top-level JSON body.
pub fn parse_body<T: DeserializeOwned>(endpoint: &'static str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Parse {
        endpoint,
        reason: e.to_string(),
    })
}

/// Parse a `{ "result": ... }` body and return the inner value.
pub fn parse_envelope<T: DeserializeOwned>(
    endpoint: &'static str,
    body: &str,
) -> Result<T, ApiError> {
    parse_body::<Envelope<T>>(endpoint, body).map(|env| env.result)
}
