//! Field deserializers for backend payloads
//!
//! Backends differ in small ways: `null` where a value is optional, numeric
//! ids, a missing or malformed list. A remote page is only usable if every
//! record on it decodes, so the record types accept these shapes instead of
//! rejecting the whole response.

use serde::de::{Deserialize, Deserializer, Error};
use serde_json::Value;

/// Decode `null` the same way as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Accept `"42"` as well as `42`
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a string or number, found {}",
            other
        ))),
    }
}

/// String list; `null` or anything that is not an array reads as empty
pub(crate) fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Record {
        #[serde(deserialize_with = "string_or_number")]
        id: String,
        #[serde(default, deserialize_with = "null_as_default")]
        views: u64,
        #[serde(default, deserialize_with = "string_list")]
        tags: Vec<String>,
    }

    #[test]
    fn test_loose_shapes() {
        let record: Record =
            serde_json::from_value(json!({ "id": 42, "views": null, "tags": "none" })).unwrap();
        assert_eq!(record.id, "42");
        assert_eq!(record.views, 0);
        assert!(record.tags.is_empty());

        let record: Record =
            serde_json::from_value(json!({ "id": "a-1", "tags": ["x", null, 3] })).unwrap();
        assert_eq!(record.id, "a-1");
        assert_eq!(record.tags, vec!["x", "3"]);

        assert!(serde_json::from_value::<Record>(json!({ "id": true })).is_err());
    }
}
