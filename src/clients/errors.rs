//! HTTP-specific error types.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use bigcommerce_checkout::clients::{HttpError, Transport};
//!
//! match client.get("/v3/carts/abc", None).await {
//!     Ok(body) => println!("Cart: {body}"),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The message is a JSON summary of the `title`, `detail` and `errors` fields
/// of the response body, plus an `error_reference` built from `X-Request-Id`.
///
/// # Example
///
/// ```rust
/// use bigcommerce_checkout::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"title":"Cart not found"}"#.to_string(),
///     error_reference: None,
/// };
///
/// assert!(error.to_string().contains("404"));
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// Reference ID for error reporting (from X-Request-Id header).
    pub error_reference: Option<String>,
}

/// Error returned when an HTTP request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// The request path is not absolute.
    #[error("Request path '{path}' must start with '/'.")]
    RelativePath {
        /// The offending path.
        path: String,
    },
}

/// Unified error type for all HTTP-related errors.
///
/// This is the error surfaced by every [`Transport`](crate::clients::Transport)
/// verb. Cancellation and timeouts configured on the underlying client surface
/// as [`HttpError::Network`].
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code when the failure came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::InvalidRequest(_) | Self::Network(_) => None,
        }
    }
}
