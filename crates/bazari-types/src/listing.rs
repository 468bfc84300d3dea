use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// A single listing field value.
///
/// Listings are open records whose key set varies across ~30 categories,
/// so values are a tagged union rather than a concrete struct. `Other`
/// absorbs nested objects and mixed arrays, so deserializing an
/// arbitrarily shaped listing never fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
    TextList(Vec<String>),
    Other(Value),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric view of the value. Numeric strings count: admin forms
    /// routinely submit amounts as strings.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => n.as_f64(),
            FieldValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Display-state semantics for feature badges: `Bool` is
    /// authoritative, other tags fall back to emptiness.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Null => false,
            FieldValue::Bool(b) => *b,
            FieldValue::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::TextList(items) => !items.is_empty(),
            FieldValue::Other(_) => true,
        }
    }

    /// Blank values lose in fallback chains: null, whitespace-only
    /// strings, empty lists.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Text(s) => s.trim().is_empty(),
            FieldValue::TextList(items) => items.is_empty(),
            _ => false,
        }
    }
}

/// An open listing record: field name → value, no fixed schema.
///
/// Backed by a `BTreeMap` so key enumeration is deterministic; the field
/// projector's stability guarantee relies on that. Read-only to the
/// engine: one listing is loaded per detail view and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Listing {
    fields: BTreeMap<String, FieldValue>,
}

impl Listing {
    /// Adapt an already-materialized JSON payload. Only non-objects are
    /// rejected; any object shape is accepted.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(_) => Ok(serde_json::from_value(value)?),
            other => Err(Error::NotAnObject(json_type_name(&other).to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Existence check (`hasOwnProperty` semantics): a field holding
    /// `false`, `0`, or `""` is still present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Keys in lexicographic order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The field's string value, if present and non-blank.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.fields
            .get(key)
            .and_then(FieldValue::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_open_record_deserializes_any_object() {
        let listing = Listing::from_value(json!({
            "title": "Evening Batch",
            "batchSize": 12,
            "isActive": false,
            "subjects": ["math", "physics"],
            "metadata": {"source": "import", "revision": 3},
            "mixed": [1, "two", null],
            "nothing": null,
        }))
        .unwrap();

        assert_eq!(listing.len(), 7);
        assert_eq!(listing.get("batchSize").unwrap().as_f64(), Some(12.0));
        assert_eq!(listing.get("isActive").unwrap().as_bool(), Some(false));
        assert!(matches!(
            listing.get("subjects"),
            Some(FieldValue::TextList(items)) if items.len() == 2
        ));
        assert!(matches!(listing.get("metadata"), Some(FieldValue::Other(_))));
        assert!(matches!(listing.get("mixed"), Some(FieldValue::Other(_))));
        assert!(matches!(listing.get("nothing"), Some(FieldValue::Null)));
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        let err = Listing::from_value(json!(["not", "a", "listing"])).unwrap_err();
        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn test_presence_is_not_truthiness() {
        let listing = Listing::from_value(json!({
            "isFeatured": false,
            "viewCount": 0,
            "notes": "",
        }))
        .unwrap();

        assert!(listing.contains_key("isFeatured"));
        assert!(listing.contains_key("viewCount"));
        assert!(listing.contains_key("notes"));
        assert!(!listing.get("isFeatured").unwrap().is_truthy());
        assert!(!listing.get("viewCount").unwrap().is_truthy());
        assert!(!listing.get("notes").unwrap().is_truthy());
    }

    #[test]
    fn test_keys_are_sorted() {
        let listing = Listing::from_value(json!({
            "zeta": 1,
            "alpha": 2,
            "mid": 3,
        }))
        .unwrap();

        let keys: Vec<_> = listing.keys().collect();
        assert_eq!(keys, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_text_skips_blank_values() {
        let listing = Listing::from_value(json!({
            "contactPerson": "  Ram Shop  ",
            "contactEmail": "   ",
            "viewCount": 5,
        }))
        .unwrap();

        assert_eq!(listing.text("contactPerson"), Some("Ram Shop"));
        assert_eq!(listing.text("contactEmail"), None);
        assert_eq!(listing.text("viewCount"), None);
        assert_eq!(listing.text("missing"), None);
    }

    #[test]
    fn test_numeric_strings_count_as_amounts() {
        let listing = Listing::from_value(json!({"feePerMonth": "1500"})).unwrap();
        assert_eq!(listing.get("feePerMonth").unwrap().as_f64(), Some(1500.0));
    }
}
