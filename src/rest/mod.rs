//! Interpretation of theme API responses.
//!
//! This module turns raw [`HttpResponse`](crate::clients::HttpResponse)
//! bodies into typed resources or errors:
//!
//! - **[`decode`]**: two-stage decoding into a tagged [`Decoded`] outcome
//! - **[`FieldErrors`]** and **[`to_sentence`]**: validation error aggregation
//! - **[`ThemeError`]**: the error type of every theme operation
//! - **[`path`]**: endpoint paths for the live theme or a specific theme
//! - **Resources**: [`Theme`], [`Asset`], [`Shop`] and their envelopes

mod errors;
mod field_errors;
pub mod path;
mod resources;
mod response;

pub use errors::ThemeError;
pub use field_errors::{to_sentence, FieldErrors};
pub use resources::{
    Asset, AssetEnvelope, AssetsEnvelope, Shop, Theme, ThemeEnvelope, ThemesEnvelope,
    LIQUID_SUFFIX, MAIN_ROLE,
};
pub use response::{decode, Decoded, Envelope};
