//! Asset resource and its response envelopes.
//!
//! Assets are the files of a theme (templates, stylesheets, scripts, images)
//! and are identified by `key`, their path inside the theme.
//!
//! # Content
//!
//! - Text files use the `value` field (Liquid templates, CSS, JS)
//! - Binary files use the `attachment` field (base64-encoded images, fonts)
//!
//! # Shadow assets
//!
//! Some assets are compiled from a Liquid source: `assets/theme.css.liquid`
//! produces `assets/theme.css`. The generated file is a *shadow* of its
//! source; see [`Asset::shadow_key`].

use base64::prelude::*;
use serde::{Deserialize, Serialize};

use crate::rest::{Envelope, FieldErrors, ThemeError};

/// Suffix of the Liquid source that generates a shadow asset.
pub const LIQUID_SUFFIX: &str = ".liquid";

/// A theme asset.
///
/// # Example
///
/// ```rust
/// use theme_client::Asset;
///
/// let asset = Asset::with_value("snippets/hello.liquid", "<p>Hello</p>");
/// assert_eq!(asset.contents().unwrap(), b"<p>Hello</p>");
///
/// let logo = Asset::from_bytes("assets/logo.png", &[0x89, 0x50, 0x4E, 0x47]);
/// assert!(logo.is_binary());
/// assert_eq!(logo.contents().unwrap(), vec![0x89, 0x50, 0x4E, 0x47]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Asset {
    /// The path to the asset within the theme, e.g. `assets/theme.js`.
    #[serde(deserialize_with = "super::null_as_default")]
    pub key: String,

    /// The text content of the asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,

    /// The base64-encoded binary content of the asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,

    /// The MD5 checksum of the asset content, used to compare with local files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,

    /// The MIME type of the asset.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub content_type: Option<String>,

    /// The public CDN URL for the asset.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub public_url: Option<String>,

    /// The size of the asset in bytes.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub size: Option<u64>,

    /// The ID of the theme this asset belongs to.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub theme_id: Option<u64>,

    /// When the asset was last updated, as sent by the server.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub updated_at: Option<String>,
}

impl Asset {
    /// Creates an asset reference with only a key.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Creates a text asset.
    #[must_use]
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
            ..Default::default()
        }
    }

    /// Creates a binary asset, base64-encoding `bytes` into `attachment`.
    #[must_use]
    pub fn from_bytes(key: impl Into<String>, bytes: &[u8]) -> Self {
        Self {
            key: key.into(),
            attachment: Some(BASE64_STANDARD.encode(bytes)),
            ..Default::default()
        }
    }

    /// Returns `true` if the content is carried in `attachment`.
    #[must_use]
    pub const fn is_binary(&self) -> bool {
        self.attachment.is_some()
    }

    /// Returns the raw content, decoding `attachment` when present.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidAttachment`] if the attachment is not valid
    /// base64, and [`ThemeError::MissingAssetContent`] if the asset carries
    /// no content at all (e.g. it came from a key-only listing).
    pub fn contents(&self) -> Result<Vec<u8>, ThemeError> {
        if let Some(attachment) = &self.attachment {
            return Ok(BASE64_STANDARD.decode(attachment)?);
        }
        if let Some(value) = &self.value {
            return Ok(value.as_bytes().to_vec());
        }
        Err(ThemeError::MissingAssetContent {
            key: self.key.clone(),
        })
    }

    /// Returns the key of the Liquid source that would generate this asset.
    ///
    /// ```rust
    /// use theme_client::Asset;
    ///
    /// assert_eq!(Asset::new("assets/theme.js").shadow_key(), "assets/theme.js.liquid");
    /// ```
    #[must_use]
    pub fn shadow_key(&self) -> String {
        format!("{}{LIQUID_SUFFIX}", self.key)
    }
}

/// `{"asset": {...}, "errors": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AssetEnvelope {
    /// The asset.
    #[serde(deserialize_with = "super::null_as_default")]
    pub asset: Asset,
    /// Validation errors, if the request was rejected.
    #[serde(skip_serializing_if = "FieldErrors::is_empty", deserialize_with = "super::null_as_default")]
    pub errors: FieldErrors,
}

impl Envelope for AssetEnvelope {
    fn take_field_errors(&mut self) -> FieldErrors {
        std::mem::take(&mut self.errors)
    }
}

/// `{"assets": [...]}`
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AssetsEnvelope {
    /// The assets. Listings requested with `fields=key` only carry keys.
    #[serde(deserialize_with = "super::null_as_default")]
    pub assets: Vec<Asset>,
}

impl Envelope for AssetsEnvelope {}
