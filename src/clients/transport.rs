//! The transport capability injected into a [`ThemeClient`](crate::ThemeClient).
//!
//! Implementors own everything below the theme protocol: connection
//! handling, authentication, proxying, timeouts, and request spacing.
//! [`HttpClient`](crate::clients::HttpClient) is the production
//! implementation; tests substitute an in-memory double.

use async_trait::async_trait;

use crate::clients::{HttpError, HttpMethod, HttpRequest, HttpResponse};

/// Sends requests to the theme API and returns the raw status and body.
///
/// Only [`send`](Self::send) must be implemented; the verb helpers build and
/// validate an [`HttpRequest`] and forward it.
///
/// # Example
///
/// ```rust
/// use async_trait::async_trait;
/// use theme_client::clients::{HttpError, HttpRequest, HttpResponse, HttpTransport};
///
/// struct AlwaysNotFound;
///
/// #[async_trait]
/// impl HttpTransport for AlwaysNotFound {
///     async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, HttpError> {
///         Ok(HttpResponse::new(404, "{}"))
///     }
/// }
/// ```
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends a request and waits for the complete response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] when no status code could be obtained.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError>;

    /// Sends a GET request.
    ///
    /// # Errors
    ///
    /// See [`send`](Self::send).
    async fn get(&self, path: &str) -> Result<HttpResponse, HttpError> {
        self.send(HttpRequest::builder(HttpMethod::Get, path).build()?)
            .await
    }

    /// Sends a POST request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`send`](Self::send).
    async fn post(&self, path: &str, body: serde_json::Value) -> Result<HttpResponse, HttpError> {
        self.send(HttpRequest::builder(HttpMethod::Post, path).body(body).build()?)
            .await
    }

    /// Sends a PUT request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`send`](Self::send).
    async fn put(&self, path: &str, body: serde_json::Value) -> Result<HttpResponse, HttpError> {
        self.send(HttpRequest::builder(HttpMethod::Put, path).body(body).build()?)
            .await
    }

    /// Sends a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`send`](Self::send).
    async fn delete(&self, path: &str) -> Result<HttpResponse, HttpError> {
        self.send(HttpRequest::builder(HttpMethod::Delete, path).build()?)
            .await
    }
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).send(request).await
    }
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Box<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        (**self).send(request).await
    }
}
