//! Error types for the Luraph API client
//!
//! This module provides error handling for the library, including:
//! - A structured [`ApiError`] built from the `errors` array the API
//!   returns on non-2xx responses
//! - Transparent propagation of transport-level failures
//! - A [`Result`] alias used throughout the crate

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for Luraph API operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Luraph API client
#[derive(Debug, Error)]
pub enum Error {
    /// The API rejected the request with one or more structured errors
    #[error("Luraph API error: {0}")]
    Api(#[from] ApiError),

    /// Network-level failure from the underlying HTTP transport
    ///
    /// DNS, TLS and connection errors surface here untouched; they are
    /// never rewrapped into an [`ApiError`].
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A successful response carried a non-empty body that is not valid JSON
    #[error("invalid JSON in response body: {0}")]
    Json(#[from] serde_json::Error),

    /// A request path could not be resolved against the base endpoint
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}

/// One entry from the API's `errors` array
///
/// The server reports validation failures per request parameter, e.g.
/// `{"param": "fileName", "message": "invalid file name"}`. General
/// failures omit `param`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LuraphError {
    /// The request parameter the message refers to, when the server names one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
    /// Human-readable description of what went wrong
    pub message: String,
    /// The raw response body, preserved when the failure had no
    /// structured `errors` array and a generic entry was synthesized
    #[serde(
        default,
        rename = "rawBody",
        skip_serializing_if = "Option::is_none"
    )]
    pub raw_body: Option<serde_json::Value>,
}

impl LuraphError {
    /// Render this entry as `param: message`, or bare `message` when the
    /// server did not name a parameter.
    fn render(&self) -> String {
        match &self.param {
            Some(param) => format!("{}: {}", param, self.message),
            None => self.message.clone(),
        }
    }
}

/// Aggregate of all error entries reported by one failed API call
///
/// Constructed fresh for each non-2xx response. Guaranteed to carry at
/// least one entry: when the response body lacks an `errors` array, a
/// single `"An unknown error occurred"` entry is synthesized with the
/// raw body attached for diagnostics.
///
/// The display message joins all entries with `" | "`, so a response of
/// `{"errors": [{"param": "node", "message": "unknown node"},
/// {"message": "try again later"}]}` renders as
/// `node: unknown node | try again later`.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// The structured entries, in the order the server reported them
    pub errors: Vec<LuraphError>,
}

impl ApiError {
    /// Build an error from the entries of a failed response
    pub fn new(errors: Vec<LuraphError>) -> Self {
        Self { errors }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = self
            .errors
            .iter()
            .map(LuraphError::render)
            .collect::<Vec<_>>()
            .join(" | ");
        write!(f, "{}", message)
    }
}

impl std::error::Error for ApiError {}
