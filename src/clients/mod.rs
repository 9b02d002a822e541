//! HTTP client types for theme API communication.
//!
//! # Overview
//!
//! - [`HttpTransport`]: The capability a [`ThemeClient`](crate::ThemeClient) sends requests through
//! - [`HttpClient`]: The `reqwest`-backed production transport
//! - [`HttpRequest`] / [`HttpResponse`]: Raw request and response values
//! - [`HttpError`]: Failures that produced no status code
//! - [`theme::ThemeClient`]: Theme and asset operations on top of a transport
//!
//! # Rate Limiting
//!
//! [`HttpClient`] keeps at least [`ThemeClientConfig::api_limit`](crate::ThemeClientConfig::api_limit)
//! between two requests (500ms by default). Callers only observe the added
//! latency; throttling never surfaces as an error.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod theme;
mod transport;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use transport::HttpTransport;

pub use theme::{ThemeClient, ThemeError, ThemeSession};
