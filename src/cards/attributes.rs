//! Free-form record fields.
//!
//! Card and review records carry many fields the collection never looks at
//! (name, cost, traits, artist, review text...). They are kept as
//! attributes so records survive a read/write round trip unchanged.
//!
//! ## AttributeValue Types
//!
//! - `Int`: Numbers (cost, strength)
//! - `Bool`: Flags (unique, banned)
//! - `Text`: Strings (name, rules text)
//! - `IntList`: Number lists
//! - `TextList`: String lists (traits, keywords)
//! - `Json`: Anything else the query returned (nulls, floats, objects)

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Key for accessing record attributes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeKey(pub String);

impl AttributeKey {
    /// Create a new attribute key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

impl From<&str> for AttributeKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AttributeKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Value for a record attribute.
///
/// Serialized untagged, so attributes read and write as plain JSON values.
/// Variants are tried in declaration order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Integer value (cost, strength).
    Int(i64),
    /// Boolean flag.
    Bool(bool),
    /// Text value (name, rules text).
    Text(String),
    /// List of integers.
    IntList(Vec<i64>),
    /// List of strings (traits, keywords).
    TextList(Vec<String>),
    /// Any other JSON value.
    Json(serde_json::Value),
}

impl AttributeValue {
    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            AttributeValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as int list reference if this is an IntList value.
    #[must_use]
    pub fn as_int_list(&self) -> Option<&[i64]> {
        match self {
            AttributeValue::IntList(v) => Some(v),
            _ => None,
        }
    }

    /// Get as text list reference if this is a TextList value.
    #[must_use]
    pub fn as_text_list(&self) -> Option<&[String]> {
        match self {
            AttributeValue::TextList(v) => Some(v),
            _ => None,
        }
    }

    /// Check if this is a JSON null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, AttributeValue::Json(serde_json::Value::Null))
    }
}

// Convenient From implementations
impl From<i64> for AttributeValue {
    fn from(v: i64) -> Self {
        AttributeValue::Int(v)
    }
}

impl From<i32> for AttributeValue {
    fn from(v: i32) -> Self {
        AttributeValue::Int(v as i64)
    }
}

impl From<bool> for AttributeValue {
    fn from(v: bool) -> Self {
        AttributeValue::Bool(v)
    }
}

impl From<String> for AttributeValue {
    fn from(v: String) -> Self {
        AttributeValue::Text(v)
    }
}

impl From<&str> for AttributeValue {
    fn from(v: &str) -> Self {
        AttributeValue::Text(v.to_string())
    }
}

impl From<Vec<i64>> for AttributeValue {
    fn from(v: Vec<i64>) -> Self {
        AttributeValue::IntList(v)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(v: Vec<String>) -> Self {
        AttributeValue::TextList(v)
    }
}

/// Collection of attributes, keyed by field name.
pub type Attributes = FxHashMap<AttributeKey, AttributeValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_key() {
        let key1 = AttributeKey::new("cost");
        let key2: AttributeKey = "cost".into();
        assert_eq!(key1, key2);
    }

    #[test]
    fn test_attribute_value_accessors() {
        let val = AttributeValue::Int(5);
        assert_eq!(val.as_int(), Some(5));
        assert_eq!(val.as_bool(), None);

        let val: AttributeValue = "Gandalf".into();
        assert_eq!(val.as_text(), Some("Gandalf"));

        let val: AttributeValue = vec!["Istari".to_string()].into();
        assert_eq!(val.as_text_list(), Some(&["Istari".to_string()][..]));
    }

    #[test]
    fn test_untagged_json() {
        let attrs: Attributes = serde_json::from_str(
            r#"{"cost": 3, "unique": true, "name": "Gandalf", "traits": ["Istari"], "artist": null, "ratio": 0.5}"#,
        )
        .unwrap();

        assert_eq!(attrs.get(&"cost".into()).and_then(|v| v.as_int()), Some(3));
        assert_eq!(attrs.get(&"unique".into()).and_then(|v| v.as_bool()), Some(true));
        assert_eq!(attrs.get(&"name".into()).and_then(|v| v.as_text()), Some("Gandalf"));
        assert!(attrs.get(&"traits".into()).and_then(|v| v.as_text_list()).is_some());
        assert!(attrs.get(&"artist".into()).map_or(false, |v| v.is_null()));
        assert!(matches!(attrs.get(&"ratio".into()), Some(AttributeValue::Json(_))));
    }

    #[test]
    fn test_serializes_plain_values() {
        let mut attrs = Attributes::default();
        attrs.insert("cost".into(), 2i32.into());

        let json = serde_json::to_string(&attrs).unwrap();
        assert_eq!(json, r#"{"cost":2}"#);
    }
}
