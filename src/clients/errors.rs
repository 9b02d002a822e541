//! Transport error types for the theme client.
//!
//! Non-2xx statuses are *not* errors at this layer: the
//! [`ThemeClient`](crate::ThemeClient) decides what each status means.
//! [`HttpError`] only covers requests that never produced a status code.
//!
//! # Example
//!
//! ```rust,ignore
//! use theme_client::clients::{HttpError, HttpTransport};
//!
//! match transport.get("/admin/themes.json").await {
//!     Ok(response) => println!("Status {}", response.code()),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation before it is sent.
///
/// # Example
///
/// ```rust
/// use theme_client::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody {
///     method: "put".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Cannot use put without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST or PUT request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET or DELETE request was given a body.
    #[error("Cannot send data with {method}.")]
    UnexpectedBody {
        /// The HTTP method that does not take a body.
        method: String,
    },

    /// The request path is not an absolute API path.
    #[error("Invalid request path '{path}'. Paths must start with '/'.")]
    InvalidPath {
        /// The rejected path.
        path: String,
    },
}

/// Unified error type for transport failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network, connection, proxy, or timeout error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
