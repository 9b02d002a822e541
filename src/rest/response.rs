//! Response body decoding.
//!
//! Every body is read twice: once into the expected resource shape and once
//! into the flat `{"errors": "<string>"}` shape used for request-level
//! rejections (bad credentials, throttling at the edge). [`decode`] reconciles
//! both attempts into a single [`Decoded`] outcome:
//!
//! | body read | primary | flat error          | outcome                         |
//! |-----------|---------|---------------------|---------------------------------|
//! | failed    | -       | -                   | `Malformed`                     |
//! | ok        | err     | err                 | `Malformed`                     |
//! | ok        | any     | non-empty string    | `FlatError`                     |
//! | ok        | ok      | err / empty string  | `Value` or `FieldErrors`        |
//! | ok        | err     | empty string        | `Malformed`                     |

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::clients::HttpResponse;
use crate::rest::{FieldErrors, ThemeError};

/// A response shape that may carry per-attribute errors.
///
/// Wrappers such as `{"theme": ..., "errors": {...}}` implement
/// [`take_field_errors`](Self::take_field_errors); shapes without an
/// `errors` member keep the default.
pub trait Envelope: DeserializeOwned {
    /// Moves the field errors out of the decoded body.
    fn take_field_errors(&mut self) -> FieldErrors {
        FieldErrors::new()
    }
}

/// The interpretation of one response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded<T> {
    /// The body matched the expected shape and reported no errors.
    Value(T),
    /// The body matched the expected shape but reported field errors.
    FieldErrors(FieldErrors),
    /// The body carried a top-level error string.
    FlatError(String),
    /// The body could not be read or matched neither shape.
    Malformed,
}

impl<T> Decoded<T> {
    /// Converts the outcome into a result, rendering field errors as one sentence.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::Validation`] for field errors
    /// - [`ThemeError::Rejected`] for a flat error string
    /// - [`ThemeError::MalformedResponse`] for unusable bodies
    pub fn into_result(self) -> Result<T, ThemeError> {
        match self {
            Self::Value(value) => Ok(value),
            Self::FieldErrors(errors) => Err(ThemeError::validation(errors)),
            Self::FlatError(message) => Err(ThemeError::Rejected(message)),
            Self::Malformed => Err(ThemeError::MalformedResponse),
        }
    }
}

#[derive(Deserialize)]
struct FlatError {
    errors: String,
}

/// Decodes a response body into `T`, probing for a flat error alongside.
///
/// # Example
///
/// ```rust
/// use theme_client::clients::HttpResponse;
/// use theme_client::rest::{decode, Decoded, ThemesEnvelope};
///
/// let response = HttpResponse::new(401, r#"{"errors":"[API] Invalid API key"}"#);
/// let decoded = decode::<ThemesEnvelope>(&response);
/// assert_eq!(decoded, Decoded::FlatError("[API] Invalid API key".to_string()));
/// ```
#[must_use]
pub fn decode<T: Envelope>(response: &HttpResponse) -> Decoded<T> {
    let Some(body) = response.body() else {
        return Decoded::Malformed;
    };

    let primary = serde_json::from_slice::<T>(body);
    let flat = serde_json::from_slice::<FlatError>(body);

    match (primary, flat) {
        (_, Ok(FlatError { errors })) if !errors.is_empty() => Decoded::FlatError(errors),
        (Ok(mut value), _) => {
            let errors = value.take_field_errors();
            if errors.is_empty() {
                Decoded::Value(value)
            } else {
                Decoded::FieldErrors(errors)
            }
        }
        (Err(err), _) => {
            tracing::debug!(code = response.code(), error = %err, "response body matched no known shape");
            Decoded::Malformed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::{AssetEnvelope, Shop, ThemeEnvelope, ThemesEnvelope};

    fn body(code: u16, json: &str) -> HttpResponse {
        HttpResponse::new(code, json.as_bytes().to_vec())
    }

    #[test]
    fn test_decodes_primary_value() {
        let decoded = decode::<ThemeEnvelope>(&body(
            200,
            r#"{"theme":{"id":7,"name":"Debut","role":"main"}}"#,
        ));

        match decoded {
            Decoded::Value(envelope) => {
                assert_eq!(envelope.theme.id, Some(7));
                assert_eq!(envelope.theme.name, "Debut");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn test_field_errors_are_surfaced() {
        let decoded =
            decode::<ThemeEnvelope>(&body(422, r#"{"errors":{"name":["can't be blank"]}}"#));

        let Decoded::FieldErrors(errors) = decoded else {
            panic!("expected field errors");
        };
        assert_eq!(errors.to_sentence(), "name can't be blank");
    }

    #[test]
    fn test_flat_error_wins_when_target_shape_fails() {
        let decoded = decode::<AssetEnvelope>(&body(401, r#"{"errors":"Not authorized"}"#));
        assert_eq!(decoded, Decoded::FlatError("Not authorized".to_string()));
    }

    #[test]
    fn test_flat_error_wins_even_when_target_shape_parses() {
        // Shop has no required members, so any object decodes into it.
        let decoded = decode::<Shop>(&body(429, r#"{"errors":"Exceeded 2 calls per second"}"#));
        assert_eq!(
            decoded,
            Decoded::FlatError("Exceeded 2 calls per second".to_string())
        );
    }

    #[test]
    fn test_null_members_still_decode() {
        let decoded = decode::<Shop>(&body(
            200,
            r#"{"id":1,"name":"S","city":"Ottawa","country":"CA","description":null}"#,
        ));
        match decoded {
            Decoded::Value(shop) => assert_eq!(shop.desc, ""),
            other => panic!("unexpected outcome: {other:?}"),
        }

        let decoded = decode::<ThemeEnvelope>(&body(
            200,
            r#"{"theme":{"id":3,"name":"Dev","role":null},"errors":null}"#,
        ));
        assert!(matches!(decoded, Decoded::Value(envelope) if envelope.theme.role.is_empty()));
    }

    #[test]
    fn test_attribute_with_no_messages_is_a_field_error() {
        let decoded = decode::<AssetEnvelope>(&body(422, r#"{"errors":{"asset":[]}}"#));
        assert!(matches!(decoded, Decoded::FieldErrors(errors) if errors.get("asset").is_some()));
    }

    #[test]
    fn test_neither_shape_is_malformed() {
        assert_eq!(
            decode::<ThemesEnvelope>(&body(200, "<html>oops</html>")),
            Decoded::Malformed
        );
        assert_eq!(decode::<ThemesEnvelope>(&body(200, "")), Decoded::Malformed);
    }

    #[test]
    fn test_empty_flat_error_without_value_is_malformed() {
        assert_eq!(
            decode::<ThemeEnvelope>(&body(200, r#"{"errors":""}"#)),
            Decoded::Malformed
        );
    }

    #[test]
    fn test_unreadable_body_is_malformed() {
        assert_eq!(
            decode::<ThemesEnvelope>(&HttpResponse::unreadable(200)),
            Decoded::Malformed
        );
    }

    #[test]
    fn test_into_result_maps_each_outcome() {
        assert_eq!(Decoded::Value(3).into_result().unwrap(), 3);
        assert!(matches!(
            Decoded::<()>::FlatError("nope".to_string()).into_result(),
            Err(ThemeError::Rejected(message)) if message == "nope"
        ));
        assert!(matches!(
            Decoded::<()>::Malformed.into_result(),
            Err(ThemeError::MalformedResponse)
        ));

        let errors: FieldErrors = vec![("key".to_string(), vec!["is invalid".to_string()])]
            .into_iter()
            .collect();
        assert!(matches!(
            Decoded::<()>::FieldErrors(errors).into_result(),
            Err(ThemeError::Validation { message, .. }) if message == "key is invalid"
        ));
    }
}
