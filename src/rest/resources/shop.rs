//! Shop metadata returned by `/meta.json`.

use serde::{Deserialize, Serialize};

use crate::rest::Envelope;

/// Read-only snapshot of the shop the client talks to.
///
/// Unlike themes and assets, the shop body is not wrapped.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Shop {
    /// The unique identifier of the shop.
    #[serde(deserialize_with = "super::null_as_default")]
    pub id: u64,
    /// The name of the shop.
    #[serde(deserialize_with = "super::null_as_default")]
    pub name: String,
    /// The city of the shop's address.
    #[serde(deserialize_with = "super::null_as_default")]
    pub city: String,
    /// The country of the shop's address.
    #[serde(deserialize_with = "super::null_as_default")]
    pub country: String,
    /// The storefront description.
    #[serde(rename = "description", deserialize_with = "super::null_as_default")]
    pub desc: String,
}

impl Envelope for Shop {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shop_deserializes_description_as_desc() {
        let shop: Shop = serde_json::from_str(
            r#"{"id":690933842,"name":"Apple Computers","city":"Ottawa","country":"CA","description":"Fruit and more","domain":"apple.myshopify.com"}"#,
        )
        .unwrap();

        assert_eq!(shop.id, 690_933_842);
        assert_eq!(shop.name, "Apple Computers");
        assert_eq!(shop.city, "Ottawa");
        assert_eq!(shop.country, "CA");
        assert_eq!(shop.desc, "Fruit and more");
    }

    #[test]
    fn test_shop_reads_null_members_as_empty() {
        let shop: Shop = serde_json::from_str(
            r#"{"id":1,"name":"S","city":null,"country":"CA","description":null}"#,
        )
        .unwrap();

        assert_eq!(shop.name, "S");
        assert_eq!(shop.city, "");
        assert_eq!(shop.desc, "");
    }

    #[test]
    fn test_shop_tolerates_missing_fields() {
        let shop: Shop = serde_json::from_str(r#"{"name":"Tiny"}"#).unwrap();
        assert_eq!(shop.name, "Tiny");
        assert_eq!(shop.id, 0);
    }
}
