//! Theme resource and its response envelopes.
//!
//! Wire shapes:
//! - single: `{"theme": {"id": 1, "name": "...", "role": "main", ...}}`
//! - collection: `{"themes": [...]}`

use serde::{Deserialize, Serialize};

use crate::rest::{Envelope, FieldErrors};

/// Role string marking the published, customer-facing theme.
pub const MAIN_ROLE: &str = "main";

/// A theme in a Shopify store.
///
/// Only non-empty writable fields are serialized, so a theme built with
/// `..Default::default()` sends just what was set.
///
/// # Example
///
/// ```rust
/// use theme_client::Theme;
///
/// let theme = Theme { role: "main".to_string(), ..Default::default() };
/// assert_eq!(serde_json::to_string(&theme).unwrap(), r#"{"role":"main"}"#);
/// assert!(theme.is_live());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Theme {
    /// The server-assigned identifier. Absent until the theme is created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    /// The name of the theme.
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "super::null_as_default")]
    pub name: String,

    /// The role of the theme, e.g. `main`, `unpublished`, `development`.
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "super::null_as_default")]
    pub role: String,

    /// Whether the theme can be previewed.
    /// Read-only field.
    #[serde(skip_serializing, deserialize_with = "super::null_as_default")]
    pub previewable: bool,

    /// Whether the theme is still being processed after upload.
    /// Read-only field.
    #[serde(skip_serializing, deserialize_with = "super::null_as_default")]
    pub processing: bool,
}

impl Theme {
    /// Returns `true` if this is the published theme.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.role == MAIN_ROLE
    }
}

/// `{"theme": {...}, "errors": {...}}`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ThemeEnvelope {
    /// The theme.
    #[serde(deserialize_with = "super::null_as_default")]
    pub theme: Theme,
    /// Validation errors, if the request was rejected.
    #[serde(skip_serializing_if = "FieldErrors::is_empty", deserialize_with = "super::null_as_default")]
    pub errors: FieldErrors,
}

impl Envelope for ThemeEnvelope {
    fn take_field_errors(&mut self) -> FieldErrors {
        std::mem::take(&mut self.errors)
    }
}

/// `{"themes": [...]}`
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ThemesEnvelope {
    /// The themes.
    #[serde(deserialize_with = "super::null_as_default")]
    pub themes: Vec<Theme>,
}

impl Envelope for ThemesEnvelope {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_deserializes_full_payload() {
        let json = r#"{
            "id": 828155753,
            "name": "Comfort",
            "created_at": "2024-01-15T10:30:00-05:00",
            "role": "main",
            "theme_store_id": null,
            "previewable": true,
            "processing": false
        }"#;

        let theme: Theme = serde_json::from_str(json).unwrap();

        assert_eq!(theme.id, Some(828_155_753));
        assert_eq!(theme.name, "Comfort");
        assert_eq!(theme.role, "main");
        assert!(theme.previewable);
        assert!(!theme.processing);
        assert!(theme.is_live());
    }

    #[test]
    fn test_theme_reads_null_members_as_defaults() {
        let theme: Theme = serde_json::from_str(
            r#"{"id":7,"name":null,"role":null,"previewable":null,"processing":null}"#,
        )
        .unwrap();

        assert_eq!(theme.id, Some(7));
        assert_eq!(theme.name, "");
        assert_eq!(theme.role, "");
        assert!(!theme.previewable);
        assert!(!theme.is_live());
    }

    #[test]
    fn test_theme_serializes_only_writable_set_fields() {
        let theme = Theme {
            id: None,
            name: "Dev".to_string(),
            previewable: true,
            processing: true,
            ..Default::default()
        };

        let json = serde_json::to_value(&theme).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Dev"}));
    }

    #[test]
    fn test_unpublished_theme_is_not_live() {
        let theme = Theme {
            role: "unpublished".to_string(),
            ..Default::default()
        };
        assert!(!theme.is_live());
    }

    #[test]
    fn test_theme_envelope_with_errors() {
        let mut envelope: ThemeEnvelope =
            serde_json::from_str(r#"{"errors":{"name":["can't be blank"]}}"#).unwrap();

        assert_eq!(envelope.theme, Theme::default());
        assert_eq!(envelope.take_field_errors().to_sentence(), "name can't be blank");
        assert!(envelope.errors.is_empty());
    }

    #[test]
    fn test_themes_envelope() {
        let envelope: ThemesEnvelope = serde_json::from_str(
            r#"{"themes":[{"id":1,"name":"A","role":"main"},{"id":2,"name":"B","role":"unpublished"}]}"#,
        )
        .unwrap();

        assert_eq!(envelope.themes.len(), 2);
        assert_eq!(envelope.themes[1].name, "B");
    }
}
