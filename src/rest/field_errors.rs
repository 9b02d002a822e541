//! Per-attribute validation errors and their sentence rendering.
//!
//! The theme API reports validation failures as
//!
//! ```json
//! {
//!   "errors": {
//!     "name": ["can't be blank"],
//!     "role": ["is invalid", "is reserved"]
//!   }
//! }
//! ```
//!
//! [`FieldErrors`] keeps attributes in the order the server sent them and
//! messages in their original order. [`to_sentence`] joins rendered messages
//! into English: `"a"`, `"a and b"`, `"a, b, and c"`.

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};

/// Ordered mapping of attribute name to its error messages.
///
/// # Example
///
/// ```rust
/// use theme_client::rest::FieldErrors;
///
/// let errors: FieldErrors =
///     serde_json::from_str(r#"{"a": ["x"], "b": ["y", "z"]}"#).unwrap();
///
/// assert_eq!(errors.to_messages(), vec!["a x", "b y", "b z"]);
/// assert_eq!(errors.to_sentence(), "a x, b y, and b z");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(String, Vec<String>)>);

impl FieldErrors {
    /// Creates an empty error map.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Returns `true` if no attribute was reported.
    ///
    /// An attribute listed with no messages still counts as an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the messages reported for `attribute`.
    #[must_use]
    pub fn get(&self, attribute: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(name, _)| name == attribute)
            .map(|(_, messages)| messages.as_slice())
    }

    /// Appends messages for `attribute`, keeping its first position.
    pub fn insert(&mut self, attribute: impl Into<String>, messages: Vec<String>) {
        let attribute = attribute.into();
        if let Some((_, existing)) = self.0.iter_mut().find(|(name, _)| *name == attribute) {
            existing.extend(messages);
        } else {
            self.0.push((attribute, messages));
        }
    }

    /// Iterates over attributes and their messages in server order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }

    /// Renders every message as `"<attribute> <message>"`.
    #[must_use]
    pub fn to_messages(&self) -> Vec<String> {
        self.iter()
            .flat_map(|(attribute, messages)| {
                messages
                    .iter()
                    .map(move |message| format!("{attribute} {message}"))
            })
            .collect()
    }

    /// Renders every message into a single English sentence.
    #[must_use]
    pub fn to_sentence(&self) -> String {
        to_sentence(&self.to_messages())
    }
}

impl FromIterator<(String, Vec<String>)> for FieldErrors {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (attribute, messages) in iter {
            errors.insert(attribute, messages);
        }
        errors
    }
}

/// Joins items into an English list with an Oxford comma.
///
/// ```rust
/// use theme_client::rest::to_sentence;
///
/// assert_eq!(to_sentence::<&str>(&[]), "");
/// assert_eq!(to_sentence(&["A"]), "A");
/// assert_eq!(to_sentence(&["A", "B"]), "A and B");
/// assert_eq!(to_sentence(&["A", "B", "C"]), "A, B, and C");
/// ```
#[must_use]
pub fn to_sentence<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} and {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{}, and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Messages may arrive as a list or, for some attributes, a bare string.
#[derive(Deserialize)]
#[serde(untagged)]
enum Messages {
    Many(Vec<String>),
    One(String),
}

impl From<Messages> for Vec<String> {
    fn from(messages: Messages) -> Self {
        match messages {
            Messages::Many(list) => list,
            Messages::One(message) => vec![message],
        }
    }
}

impl<'de> Deserialize<'de> for FieldErrors {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldErrorsVisitor;

        impl<'de> Visitor<'de> for FieldErrorsVisitor {
            type Value = FieldErrors;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of attribute names to error messages")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut errors = FieldErrors::new();
                while let Some((attribute, messages)) = map.next_entry::<String, Messages>()? {
                    errors.insert(attribute, messages.into());
                }
                Ok(errors)
            }
        }

        deserializer.deserialize_map(FieldErrorsVisitor)
    }
}

impl Serialize for FieldErrors {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.0.iter().map(|(name, messages)| (name, messages)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_rendering() {
        assert_eq!(to_sentence::<String>(&[]), "");
        assert_eq!(to_sentence(&["A"]), "A");
        assert_eq!(to_sentence(&["A", "B"]), "A and B");
        assert_eq!(to_sentence(&["A", "B", "C"]), "A, B, and C");
        assert_eq!(to_sentence(&["A", "B", "C", "D"]), "A, B, C, and D");
    }

    #[test]
    fn test_deserialize_preserves_server_order() {
        let errors: FieldErrors =
            serde_json::from_str(r#"{"zeta": ["last"], "alpha": ["first", "second"]}"#).unwrap();

        let attributes: Vec<&str> = errors.iter().map(|(name, _)| name).collect();
        assert_eq!(attributes, vec!["zeta", "alpha"]);
        assert_eq!(
            errors.to_messages(),
            vec!["zeta last", "alpha first", "alpha second"]
        );
    }

    #[test]
    fn test_aggregates_multiple_attributes() {
        let errors: FieldErrors =
            serde_json::from_str(r#"{"a": ["x"], "b": ["y", "z"]}"#).unwrap();

        assert_eq!(errors.to_sentence(), "a x, b y, and b z");
    }

    #[test]
    fn test_accepts_bare_string_messages() {
        let errors: FieldErrors =
            serde_json::from_str(r#"{"asset": "is locked"}"#).unwrap();

        assert_eq!(errors.get("asset"), Some(&["is locked".to_string()][..]));
    }

    #[test]
    fn test_rejects_non_map_shapes() {
        assert!(serde_json::from_str::<FieldErrors>(r#""Not Found""#).is_err());
        assert!(serde_json::from_str::<FieldErrors>(r#"{"a": [1]}"#).is_err());
    }

    #[test]
    fn test_attribute_without_messages_is_still_an_error() {
        assert!(FieldErrors::new().is_empty());

        let errors: FieldErrors = serde_json::from_str(r#"{"name": []}"#).unwrap();
        assert!(!errors.is_empty());
        assert_eq!(errors.get("name"), Some(&[] as &[String]));
        assert_eq!(errors.to_sentence(), "");
    }

    #[test]
    fn test_duplicate_attributes_are_merged() {
        let mut errors = FieldErrors::new();
        errors.insert("name", vec!["is taken".to_string()]);
        errors.insert("role", vec!["is invalid".to_string()]);
        errors.insert("name", vec!["is too long".to_string()]);

        assert_eq!(
            errors.to_messages(),
            vec!["name is taken", "name is too long", "role is invalid"]
        );
    }

    #[test]
    fn test_serializes_as_map() {
        let errors: FieldErrors = vec![("asset".to_string(), vec!["x".to_string()])]
            .into_iter()
            .collect();

        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            serde_json::json!({"asset": ["x"]})
        );
    }
}
