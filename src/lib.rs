//! # Shopify Theme Client
//!
//! An async client for the theme and asset endpoints of the Shopify Admin
//! API, used by theme development tools to list, create, publish, and sync
//! themes.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`ThemeClientConfig`] and [`ThemeClientConfigBuilder`]
//! - Validated newtypes for the access token, shop domain, theme id, and API host
//! - [`ThemeClient`], which maps every theme/asset operation to one request
//!   and every failure to a [`ThemeError`]
//! - Recovery from uploads blocked by a generated `.liquid` asset
//! - Asset listings with ignored files and compiled shadows removed
//! - A pluggable [`HttpTransport`] with a `reqwest`-backed default ([`HttpClient`])
//!
//! ## Quick Start
//!
//! ```rust
//! use theme_client::{AccessToken, ShopDomain, ThemeClientConfig, ThemeId};
//!
//! let config = ThemeClientConfig::builder()
//!     .domain(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shpat_123").unwrap())
//!     .theme_id(ThemeId::new(828155753).unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.domain().as_ref(), "my-store.myshopify.com");
//! ```
//!
//! ## Working with Themes
//!
//! ```rust,ignore
//! use theme_client::{Asset, NoFilter, ThemeClient};
//!
//! let mut client = ThemeClient::from_config(&config, NoFilter)?;
//!
//! // Create an unpublished theme; the client is now bound to it
//! let theme = client.create_theme("Staging").await?;
//!
//! client.update_asset(&Asset::with_value("layout/theme.liquid", "{{ content_for_layout }}")).await?;
//! client.publish_theme().await?;
//! ```
//!
//! ## Ignoring Files
//!
//! Any `Fn(&str) -> bool` is a [`FileFilter`]:
//!
//! ```rust
//! use theme_client::FileFilter;
//!
//! let filter = |key: &str| key.starts_with("config/");
//! assert!(filter.is_ignored("config/settings_data.json"));
//! assert!(!filter.is_ignored("assets/theme.js"));
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: configuration and the theme binding live on the client
//! - **Fail-fast validation**: newtypes validate on construction, and
//!   precondition failures never reach the network
//! - **Sequential calls**: every operation completes its request before returning
//! - **Async-first**: designed for use with the Tokio runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod filter;
pub mod rest;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, HostUrl, ShopDomain, ThemeClientConfig, ThemeClientConfigBuilder, ThemeId};
pub use error::ConfigError;
pub use filter::{FileFilter, NoFilter};

// Re-export client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse, HttpTransport,
    InvalidHttpRequestError, ThemeClient, ThemeError, ThemeSession,
};

// Re-export resource types
pub use rest::{Asset, FieldErrors, Shop, Theme};
