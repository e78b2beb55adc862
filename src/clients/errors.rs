//! HTTP-specific error types for the WooCommerce API client.
//!
//! This module contains the error types for a single request/response
//! exchange. Nothing is retried: every failure is returned to the caller.
//!
//! - [`UnsupportedMethodError`]: The method is not one of the five supported ones
//! - [`HttpStatusError`]: The response status was classified as a failure
//! - [`HttpError`]: Unified error type encompassing all request failures
//!
//! # Example
//!
//! ```rust,ignore
//! use woocommerce_api::HttpError;
//!
//! match client.http_client().request("GET", "orders", None, None::<&()>).await {
//!     Ok(body) => println!("Status {}", body.status()),
//!     Err(HttpError::Status(e)) => println!("API error {}: {}", e.code, e.status_line),
//!     Err(HttpError::Transport(e)) => println!("Network error: {e}"),
//!     Err(HttpError::UnsupportedMethod(e)) => println!("{e}"),
//!     Err(HttpError::Encoding(e)) => println!("Bad payload: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when a request names a method outside GET, POST, PUT,
/// DELETE and OPTIONS.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::clients::UnsupportedMethodError;
///
/// let error = UnsupportedMethodError { method: "PATCH".to_string() };
/// assert_eq!(error.to_string(), "Method is not recognised: PATCH");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Method is not recognised: {method}")]
pub struct UnsupportedMethodError {
    /// The method that was requested.
    pub method: String,
}

/// Error returned when a response status is classified as a failure.
///
/// The response body is discarded; only the status survives. The status
/// line is rebuilt from the code and its canonical reason phrase, so a
/// non-standard phrase sent by the server is not preserved. Match on
/// [`code`](Self::code) rather than the text.
///
/// # Example
///
/// ```rust
/// use woocommerce_api::clients::HttpStatusError;
///
/// let error = HttpStatusError::new(404);
/// assert_eq!(error.status_line, "404 Not Found");
/// assert_eq!(error.to_string(), "Request failed: 404 Not Found");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Request failed: {status_line}")]
pub struct HttpStatusError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The status line, e.g. `404 Not Found`.
    pub status_line: String,
}

impl HttpStatusError {
    /// Builds the error for `code`, using the canonical reason phrase.
    ///
    /// Codes without a canonical phrase produce a bare numeric status line.
    #[must_use]
    pub fn new(code: u16) -> Self {
        let reason = reqwest::StatusCode::from_u16(code)
            .ok()
            .and_then(|status| status.canonical_reason());
        let status_line = reason.map_or_else(|| code.to_string(), |r| format!("{code} {r}"));
        Self { code, status_line }
    }
}

/// Unified error type for a single API request.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The method is not supported. Raised before any I/O.
    #[error(transparent)]
    UnsupportedMethod(#[from] UnsupportedMethodError),

    /// The payload could not be serialized to JSON. Raised before any I/O.
    #[error("Failed to encode request payload: {0}")]
    Encoding(#[from] serde_json::Error),

    /// DNS, connection, TLS or timeout failure.
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response status was classified as a failure.
    #[error(transparent)]
    Status(#[from] HttpStatusError),
}
