//! JSON-over-HTTP transport seam.
//!
//! The browser implementation lives in `web::http` and uses `gloo-net`.
//! Components take any [`JsonTransport`] so their request shapes and error
//! paths are testable without a network.
//!
//! ERROR HANDLING
//! ==============
//! Every failure collapses into [`ApiError`]. Callers decide whether to log,
//! surface, or propagate it; the transport itself never retries.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("unknown IOC type: {0}")]
    UnknownType(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Issues `GET` requests and parses the body as JSON.
pub trait JsonTransport {
    /// Fetch `url` and return its JSON body.
    ///
    /// Non-2xx statuses map to [`ApiError::Status`]; unparseable bodies map
    /// to [`ApiError::Decode`].
    fn get_json(&self, url: &str) -> impl Future<Output = Result<Value, ApiError>>;
}

/// Decode a JSON body into a typed response.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the value does not match `T`.
pub fn decode<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    Ok(serde_json::from_value(body)?)
}

/// Map an HTTP status to an error unless it is in the 2xx range.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for any non-2xx status.
pub fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::Status(status)) }
}
