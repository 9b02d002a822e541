//! Error type for theme and asset operations.
//!
//! [`ThemeError`] covers every way a [`ThemeClient`](crate::ThemeClient) call
//! can fail:
//!
//! - **Preconditions** checked before any request: [`ThemeError::ThemeNameRequired`],
//!   [`ThemeError::InfoWithoutThemeId`], [`ThemeError::PublishWithoutThemeId`],
//!   [`ThemeError::MissingAssetName`]
//! - **Transport** failures: [`ThemeError::Http`]
//! - **Status codes** with a fixed meaning: [`ThemeError::ThemeNotFound`],
//!   [`ThemeError::NotPartOfTheme`], [`ThemeError::CriticalFile`],
//!   [`ThemeError::ShopDomainNotFound`]
//! - **Bodies**: [`ThemeError::MalformedResponse`], [`ThemeError::Rejected`]
//!   (flat `{"errors": "..."}`), [`ThemeError::Validation`] (field errors)
//!
//! # Example
//!
//! ```rust,ignore
//! use theme_client::ThemeError;
//!
//! match client.delete_asset(&asset).await {
//!     Ok(()) => println!("removed {}", asset.key),
//!     Err(ThemeError::CriticalFile) => println!("{} is required by the theme", asset.key),
//!     Err(ThemeError::Validation { message, .. }) => println!("rejected: {message}"),
//!     Err(e) => println!("error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;
use crate::rest::FieldErrors;

/// Error type for theme client operations.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// `create_theme` was called with a blank name.
    #[error("theme name is required to create a theme")]
    ThemeNameRequired,

    /// `get_theme_info` was called on a client targeting the live theme.
    #[error("cannot get info without a theme id")]
    InfoWithoutThemeId,

    /// `publish_theme` was called on a client targeting the live theme.
    #[error("cannot publish a theme without a theme id set")]
    PublishWithoutThemeId,

    /// The asset has no key, or the server rejected it for that reason (406).
    #[error("asset has no name so could not be processed")]
    MissingAssetName,

    /// The targeted theme does not exist (404).
    #[error("requested theme was not found")]
    ThemeNotFound,

    /// The asset key does not exist in the theme (404).
    #[error("this file is not part of your theme")]
    NotPartOfTheme,

    /// The server refused to delete a required asset (403).
    #[error("this file is critical and removing it would cause your theme to become non-functional")]
    CriticalFile,

    /// The shop domain does not exist (404 on `/meta.json`).
    #[error("provided myshopify domain does not exist")]
    ShopDomainNotFound,

    /// The body matched neither the expected shape nor a flat error.
    #[error("received a malformed response")]
    MalformedResponse,

    /// The server rejected the request as a whole, e.g. bad credentials.
    #[error("{0}")]
    Rejected(String),

    /// The server reported per-attribute validation errors.
    #[error("{message}")]
    Validation {
        /// The errors rendered as one sentence.
        message: String,
        /// The errors as returned by the server.
        errors: FieldErrors,
    },

    /// An asset carries neither `value` nor `attachment`.
    #[error("asset {key} has no content")]
    MissingAssetContent {
        /// The asset key.
        key: String,
    },

    /// An asset attachment is not valid base64.
    #[error("asset attachment is not valid base64: {0}")]
    InvalidAttachment(#[from] base64::DecodeError),

    /// The transport failed before a status code was received.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ThemeError {
    /// Builds a [`ThemeError::Validation`] whose message lists every
    /// `"<attribute> <message>"` pair.
    #[must_use]
    pub fn validation(errors: FieldErrors) -> Self {
        Self::Validation {
            message: errors.to_sentence(),
            errors,
        }
    }

    /// Returns the field errors for [`ThemeError::Validation`].
    #[must_use]
    pub const fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }
}
