//! Theme and asset operations.
//!
//! # Overview
//!
//! - [`ThemeClient`]: theme lifecycle (list, create, info, publish) and asset
//!   lifecycle (list keys, fetch, upload, delete)
//! - [`ThemeSession`]: whether the client targets the live theme or a specific one
//! - [`ThemeError`]: re-exported from [`crate::rest`]
//!
//! # Example
//!
//! ```rust,ignore
//! use theme_client::{AccessToken, Asset, NoFilter, ShopDomain, ThemeClient, ThemeClientConfig};
//!
//! let config = ThemeClientConfig::builder()
//!     .domain(ShopDomain::new("my-store").unwrap())
//!     .access_token(AccessToken::new("shptka_123").unwrap())
//!     .build()?;
//!
//! let mut client = ThemeClient::from_config(&config, NoFilter)?;
//! let theme = client.create_theme("Staging").await?;
//! client.update_asset(&Asset::with_value("assets/theme.js", "console.log(1)")).await?;
//! client.publish_theme().await?;
//! ```

mod client;
mod session;

pub use client::{ThemeClient, GENERATED_ASSET_CONFLICT};
pub use session::ThemeSession;

pub use crate::rest::ThemeError;
