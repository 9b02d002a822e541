//! Default `reqwest`-backed transport.
//!
//! This module provides the [`HttpClient`] type, the production
//! [`HttpTransport`] used by [`ThemeClient::from_config`](crate::ThemeClient::from_config).

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::HttpTransport;
use crate::config::ThemeClientConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for the Shopify theme API.
///
/// The client handles:
/// - Base URI construction from the shop domain or `api_host`
/// - Default headers including User-Agent and the access token
/// - Proxy and per-request timeout
/// - A minimum spacing between consecutive requests
///
/// Non-2xx responses are returned as ordinary [`HttpResponse`] values.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. Requests issued concurrently through the
/// same client are spaced out, never rejected.
///
/// # Example
///
/// ```rust,ignore
/// use theme_client::{AccessToken, ShopDomain, ThemeClientConfig};
/// use theme_client::clients::{HttpClient, HttpTransport};
///
/// let config = ThemeClientConfig::builder()
///     .domain(ShopDomain::new("my-store").unwrap())
///     .access_token(AccessToken::new("shptka_123").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config)?;
/// let response = client.get("/admin/themes.json").await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI (e.g., `https://my-store.myshopify.com`).
    base_uri: String,
    default_headers: HashMap<String, String>,
    api_limit: Duration,
    last_request: Mutex<Option<Instant>>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the proxy URL is invalid or the
    /// underlying client cannot be created.
    pub fn new(config: &ThemeClientConfig) -> Result<Self, HttpError> {
        let shop = config.domain().as_ref();
        let base_uri = config
            .api_host()
            .map_or_else(|| format!("https://{shop}"), |host| host.as_ref().to_string());

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}Shopify Theme Client v{SDK_VERSION} | Rust");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert(
            "X-Shopify-Access-Token".to_string(),
            config.access_token().as_ref().to_string(),
        );

        // Requests sent to an api_host still address the shop
        if config.api_host().is_some() {
            default_headers.insert("Host".to_string(), shop.to_string());
        }

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout());
        if let Some(proxy) = config.proxy() {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }

        Ok(Self {
            client: builder.build()?,
            base_uri,
            default_headers,
            api_limit: config.api_limit(),
            last_request: Mutex::new(None),
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the minimum spacing between requests.
    #[must_use]
    pub const fn api_limit(&self) -> Duration {
        self.api_limit
    }

    /// Waits until the configured spacing since the previous request has elapsed.
    async fn throttle(&self) {
        let mut last = self.last_request.lock().await;
        if let Some(previous) = *last {
            tokio::time::sleep_until(previous + self.api_limit).await;
        }
        *last = Some(Instant::now());
    }
}

#[async_trait]
impl HttpTransport for HttpClient {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}", self.base_uri, request.path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.json(body);
        }

        self.throttle().await;

        tracing::debug!(method = %request.http_method, path = %request.path, "sending theme API request");
        let res = req_builder.send().await?;
        let code = res.status().as_u16();

        match res.bytes().await {
            Ok(bytes) => {
                tracing::debug!(code, path = %request.path, "received theme API response");
                Ok(HttpResponse::new(code, bytes.to_vec()))
            }
            Err(err) => {
                tracing::warn!(code, path = %request.path, error = %err, "failed to read response body");
                Ok(HttpResponse::unreadable(code))
            }
        }
    }
}
