//! Validated newtype wrappers for configuration values.
//!
//! Each wrapper checks its contents on construction so that a
//! [`ThemeClientConfig`](super::ThemeClientConfig) can never hold a blank
//! token, a foreign domain, or a theme id of zero.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The password or theme access token sent with every request.
///
/// The `Debug` implementation masks the value so tokens never end up in logs.
///
/// # Example
///
/// ```rust
/// use theme_client::AccessToken;
///
/// let token = AccessToken::new("shptka_123").unwrap();
/// assert_eq!(token.as_ref(), "shptka_123");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token: String = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated `*.myshopify.com` shop domain.
///
/// Short names (`my-store`) are normalized to `my-store.myshopify.com`.
///
/// ```rust
/// use theme_client::ShopDomain;
///
/// let domain = ShopDomain::new("My-Store").unwrap();
/// assert_eq!(domain.as_ref(), "my-store.myshopify.com");
/// assert_eq!(domain.shop_name(), "my-store");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopDomain {
    full_domain: String,
    shop_name_end: usize,
}

impl ShopDomain {
    const SUFFIX: &'static str = ".myshopify.com";

    /// Creates a new validated shop domain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidShopDomain`] if the domain is not a
    /// myshopify domain or the shop name contains invalid characters.
    pub fn new(domain: impl Into<String>) -> Result<Self, ConfigError> {
        let domain: String = domain.into();
        let domain = domain.trim().to_lowercase();

        let full_domain = if domain.ends_with(Self::SUFFIX) {
            domain
        } else if domain.is_empty() || domain.contains('.') {
            return Err(ConfigError::InvalidShopDomain { domain });
        } else {
            format!("{domain}{}", Self::SUFFIX)
        };

        let shop_name_end = full_domain.len() - Self::SUFFIX.len();
        if !Self::is_valid_shop_name(&full_domain[..shop_name_end]) {
            return Err(ConfigError::InvalidShopDomain {
                domain: full_domain,
            });
        }

        Ok(Self {
            full_domain,
            shop_name_end,
        })
    }

    /// Returns the shop name portion of the domain.
    #[must_use]
    pub fn shop_name(&self) -> &str {
        &self.full_domain[..self.shop_name_end]
    }

    // lowercase letters, digits and inner hyphens
    fn is_valid_shop_name(name: &str) -> bool {
        !name.is_empty()
            && !name.starts_with('-')
            && !name.ends_with('-')
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl AsRef<str> for ShopDomain {
    fn as_ref(&self) -> &str {
        &self.full_domain
    }
}

impl fmt::Display for ShopDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_domain)
    }
}

impl Serialize for ShopDomain {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.full_domain)
    }
}

impl<'de> Deserialize<'de> for ShopDomain {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// The server-assigned identifier of a theme.
///
/// Always non-zero: a theme that has not been created yet has no id at all,
/// which is modelled by [`ThemeSession::Unbound`](crate::ThemeSession::Unbound)
/// rather than a sentinel value.
///
/// ```rust
/// use theme_client::ThemeId;
///
/// let id: ThemeId = "828155753".parse().unwrap();
/// assert_eq!(id.get(), 828_155_753);
/// assert_eq!(id.to_string(), "828155753");
/// assert!("0".parse::<ThemeId>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThemeId(u64);

impl ThemeId {
    /// Creates a theme id from its numeric value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidThemeId`] for zero.
    pub fn new(id: u64) -> Result<Self, ConfigError> {
        if id == 0 {
            return Err(ConfigError::InvalidThemeId { id: id.to_string() });
        }
        Ok(Self(id))
    }

    /// Returns the numeric id.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for ThemeId {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidThemeId { id: s.to_string() })?;
        Self::new(id)
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated base URL used in place of `https://{shop domain}`.
///
/// Useful when requests must go through a local proxy or a mock server.
///
/// ```rust
/// use theme_client::HostUrl;
///
/// let url = HostUrl::new("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(url.scheme(), "http");
/// assert_eq!(url.as_ref(), "http://127.0.0.1:8080");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
}

impl HostUrl {
    /// Creates a new validated host URL. Trailing slashes are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url: String = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let Some(scheme_end) = url.find("://") else {
            return Err(ConfigError::InvalidHostUrl { url });
        };

        let scheme = &url[..scheme_end];
        let host = &url[scheme_end + 3..];
        if scheme.is_empty()
            || !scheme.chars().all(|c| c.is_ascii_alphabetic())
            || host.is_empty()
            || host.starts_with([':', '/', '?', '#'])
        {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        Ok(Self { url, scheme_end })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_rejects_blank() {
        assert!(matches!(
            AccessToken::new(""),
            Err(ConfigError::EmptyAccessToken)
        ));
        assert!(matches!(
            AccessToken::new("   "),
            Err(ConfigError::EmptyAccessToken)
        ));
    }

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("super-secret").unwrap();
        let debug_output = format!("{token:?}");
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_shop_domain_normalizes_short_format() {
        let domain = ShopDomain::new("my-store").unwrap();
        assert_eq!(domain.as_ref(), "my-store.myshopify.com");
        assert_eq!(domain.shop_name(), "my-store");
    }

    #[test]
    fn test_shop_domain_rejects_invalid_domains() {
        assert!(ShopDomain::new("").is_err());
        assert!(ShopDomain::new(".myshopify.com").is_err());
        assert!(ShopDomain::new("my store").is_err());
        assert!(ShopDomain::new("my_store").is_err());
        assert!(ShopDomain::new("-my-store").is_err());
        assert!(ShopDomain::new("my-store.otherdomain.com").is_err());
        assert!(ShopDomain::new("MY-STORE").is_ok());
    }

    #[test]
    fn test_shop_domain_deserializes_from_string() {
        let domain: ShopDomain = serde_json::from_str(r#""test-shop""#).unwrap();
        assert_eq!(domain.as_ref(), "test-shop.myshopify.com");
        assert!(serde_json::from_str::<ShopDomain>(r#""bad domain""#).is_err());
    }

    #[test]
    fn test_theme_id_parsing() {
        assert_eq!("42".parse::<ThemeId>().unwrap().get(), 42);
        assert_eq!(" 42 ".parse::<ThemeId>().unwrap().get(), 42);
        assert!(matches!(
            "".parse::<ThemeId>(),
            Err(ConfigError::InvalidThemeId { .. })
        ));
        assert!("-1".parse::<ThemeId>().is_err());
        assert!("0".parse::<ThemeId>().is_err());
        assert!(ThemeId::new(0).is_err());
    }

    #[test]
    fn test_host_url_validates_format() {
        let url = HostUrl::new("https://proxy.example.com").unwrap();
        assert_eq!(url.scheme(), "https");

        let url = HostUrl::new("http://localhost:3000/").unwrap();
        assert_eq!(url.as_ref(), "http://localhost:3000");

        assert!(HostUrl::new("proxy.example.com").is_err());
        assert!(HostUrl::new("https://").is_err());
        assert!(HostUrl::new("://example.com").is_err());
        assert!(HostUrl::new("http://:3000").is_err());
    }
}
