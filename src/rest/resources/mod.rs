//! Typed resources exchanged with the theme API.
//!
//! - [`Theme`] (`{"theme": ...}` / `{"themes": [...]}`)
//! - [`Asset`] (`{"asset": ...}` / `{"assets": [...]}`)
//! - [`Shop`] (unwrapped)

mod asset;
mod shop;
mod theme;

pub use asset::{Asset, AssetEnvelope, AssetsEnvelope, LIQUID_SUFFIX};
pub use shop::Shop;
pub use theme::{Theme, ThemeEnvelope, ThemesEnvelope, MAIN_ROLE};

use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` as the field's default.
///
/// `#[serde(default)]` only covers absent members; the API also sends
/// `null` for unset scalars (e.g. a shop without a description).
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
