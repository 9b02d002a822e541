//! Configuration types for the theme client.
//!
//! This module provides the settings used to build the default
//! [`HttpClient`](crate::clients::HttpClient) transport and to seed the
//! initial [`ThemeSession`](crate::ThemeSession) of a
//! [`ThemeClient`](crate::ThemeClient).
//!
//! # Overview
//!
//! - [`ThemeClientConfig`]: The main configuration struct
//! - [`ThemeClientConfigBuilder`]: A builder for constructing [`ThemeClientConfig`]
//! - [`ShopDomain`], [`AccessToken`], [`ThemeId`], [`HostUrl`]: validated newtypes
//!
//! # Example
//!
//! ```rust
//! use theme_client::{AccessToken, ShopDomain, ThemeClientConfig};
//! use std::time::Duration;
//!
//! let config = ThemeClientConfig::builder()
//!     .domain(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shptka_123").unwrap())
//!     .theme_id("828155753".parse().unwrap())
//!     .timeout(Duration::from_secs(60))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.theme_id().map(|id| id.get()), Some(828_155_753));
//! ```

mod newtypes;

pub use newtypes::{AccessToken, HostUrl, ShopDomain, ThemeId};

use std::time::Duration;

use crate::error::ConfigError;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default minimum spacing between two requests (2 calls per second).
pub const DEFAULT_API_LIMIT: Duration = Duration::from_millis(500);

/// Configuration for a theme client.
///
/// `ThemeClientConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ThemeClientConfig {
    domain: ShopDomain,
    access_token: AccessToken,
    theme_id: Option<ThemeId>,
    api_host: Option<HostUrl>,
    proxy: Option<String>,
    timeout: Duration,
    api_limit: Duration,
    user_agent_prefix: Option<String>,
}

impl ThemeClientConfig {
    /// Creates a new builder for constructing a `ThemeClientConfig`.
    #[must_use]
    pub fn builder() -> ThemeClientConfigBuilder {
        ThemeClientConfigBuilder::new()
    }

    /// Returns the shop domain.
    #[must_use]
    pub const fn domain(&self) -> &ShopDomain {
        &self.domain
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the theme the client starts bound to, if any.
    ///
    /// `None` means asset calls target the live theme.
    #[must_use]
    pub const fn theme_id(&self) -> Option<ThemeId> {
        self.theme_id
    }

    /// Returns the base URL override, if configured.
    #[must_use]
    pub const fn api_host(&self) -> Option<&HostUrl> {
        self.api_host.as_ref()
    }

    /// Returns the proxy URL, if configured.
    #[must_use]
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the minimum spacing enforced between requests.
    #[must_use]
    pub const fn api_limit(&self) -> Duration {
        self.api_limit
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ThemeClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ThemeClientConfig>();
};

/// Builder for constructing [`ThemeClientConfig`] instances.
///
/// `domain` and `access_token` are required.
///
/// # Defaults
///
/// - `theme_id`: `None` (live theme)
/// - `api_host`, `proxy`, `user_agent_prefix`: `None`
/// - `timeout`: [`DEFAULT_TIMEOUT`]
/// - `api_limit`: [`DEFAULT_API_LIMIT`]
#[derive(Debug, Default)]
pub struct ThemeClientConfigBuilder {
    domain: Option<ShopDomain>,
    access_token: Option<AccessToken>,
    theme_id: Option<ThemeId>,
    api_host: Option<HostUrl>,
    proxy: Option<String>,
    timeout: Option<Duration>,
    api_limit: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl ThemeClientConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the shop domain (required).
    #[must_use]
    pub fn domain(mut self, domain: ShopDomain) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Binds the client to a specific theme instead of the live one.
    #[must_use]
    pub const fn theme_id(mut self, id: ThemeId) -> Self {
        self.theme_id = Some(id);
        self
    }

    /// Sends requests to this base URL instead of `https://{domain}`.
    ///
    /// The shop domain is still sent as the `Host` header.
    #[must_use]
    pub fn api_host(mut self, host: HostUrl) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Routes all requests through an HTTP proxy.
    #[must_use]
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the minimum spacing between requests.
    #[must_use]
    pub const fn api_limit(mut self, limit: Duration) -> Self {
        self.api_limit = Some(limit);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ThemeClientConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `domain` or
    /// `access_token` are not set.
    pub fn build(self) -> Result<ThemeClientConfig, ConfigError> {
        let domain = self
            .domain
            .ok_or(ConfigError::MissingRequiredField { field: "domain" })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(ThemeClientConfig {
            domain,
            access_token,
            theme_id: self.theme_id,
            api_host: self.api_host,
            proxy: self.proxy.filter(|p| !p.trim().is_empty()),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            api_limit: self.api_limit.unwrap_or(DEFAULT_API_LIMIT),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domain() -> ShopDomain {
        ShopDomain::new("test-shop").unwrap()
    }

    fn token() -> AccessToken {
        AccessToken::new("test-token").unwrap()
    }

    #[test]
    fn test_builder_requires_domain() {
        let result = ThemeClientConfigBuilder::new().access_token(token()).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "domain" })
        ));
    }

    #[test]
    fn test_builder_requires_access_token() {
        let result = ThemeClientConfigBuilder::new().domain(domain()).build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_builder_applies_defaults() {
        let config = ThemeClientConfig::builder()
            .domain(domain())
            .access_token(token())
            .build()
            .unwrap();

        assert_eq!(config.domain().as_ref(), "test-shop.myshopify.com");
        assert_eq!(config.theme_id(), None);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
        assert_eq!(config.api_limit(), Duration::from_millis(500));
        assert!(config.api_host().is_none());
        assert!(config.proxy().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ThemeClientConfig::builder()
            .domain(domain())
            .access_token(token())
            .theme_id(ThemeId::new(7).unwrap())
            .api_host(HostUrl::new("http://127.0.0.1:9000").unwrap())
            .proxy("http://proxy.local:3128")
            .timeout(Duration::from_secs(5))
            .api_limit(Duration::ZERO)
            .user_agent_prefix("themekit/1.0")
            .build()
            .unwrap();

        assert_eq!(config.theme_id().map(ThemeId::get), Some(7));
        assert_eq!(config.api_host().unwrap().as_ref(), "http://127.0.0.1:9000");
        assert_eq!(config.proxy(), Some("http://proxy.local:3128"));
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.api_limit(), Duration::ZERO);
        assert_eq!(config.user_agent_prefix(), Some("themekit/1.0"));
    }

    #[test]
    fn test_blank_proxy_is_ignored() {
        let config = ThemeClientConfig::builder()
            .domain(domain())
            .access_token(token())
            .proxy("  ")
            .build()
            .unwrap();

        assert!(config.proxy().is_none());
    }
}
