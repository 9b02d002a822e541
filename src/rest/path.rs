//! Endpoint paths for theme and asset operations.
//!
//! Asset endpoints come in two variants depending on the session:
//!
//! - live theme: `/admin/assets.json`
//! - specific theme: `/admin/themes/{id}/assets.json`
//!
//! # Example
//!
//! ```rust
//! use theme_client::rest::path::asset_path;
//! use theme_client::ThemeId;
//!
//! assert_eq!(asset_path(None, &[]), "/admin/assets.json");
//!
//! let id = ThemeId::new(42).unwrap();
//! assert_eq!(
//!     asset_path(Some(id), &[("asset[key]", "assets/theme.js")]),
//!     "/admin/themes/42/assets.json?asset%5Bkey%5D=assets%2Ftheme.js"
//! );
//! ```

use crate::config::ThemeId;

/// Shop metadata.
pub const SHOP_PATH: &str = "/meta.json";

/// Theme collection: list and create.
pub const THEMES_PATH: &str = "/admin/themes.json";

/// Query parameter selecting an asset by key.
pub const ASSET_KEY_PARAM: &str = "asset[key]";

/// Path of a single theme.
#[must_use]
pub fn theme_path(id: ThemeId) -> String {
    format!("/admin/themes/{id}.json")
}

/// Path of the asset collection, with an encoded query string.
///
/// Parameters are emitted sorted by name so paths are stable.
#[must_use]
pub fn asset_path(theme: Option<ThemeId>, query: &[(&str, &str)]) -> String {
    let base = theme.map_or_else(
        || "/admin/assets.json".to_string(),
        |id| format!("/admin/themes/{id}/assets.json"),
    );

    if query.is_empty() {
        return base;
    }

    let mut params = query.to_vec();
    params.sort_unstable();
    let encoded: Vec<String> = params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect();

    format!("{base}?{}", encoded.join("&"))
}
