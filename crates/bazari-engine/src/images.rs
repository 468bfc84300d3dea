use std::collections::BTreeMap;

use bazari_types::FieldValue;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The raw shapes image data arrives in. Older category forms stored an
/// ordered list, some a single URI string, some a keyed map; absence is
/// `None` at the call site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImagesRaw {
    Many(Vec<String>),
    One(String),
    Keyed(BTreeMap<String, String>),
}

impl ImagesRaw {
    /// Adapt a listing's `images` field defensively. Scalar non-string
    /// entries are stringified, container entries are dropped.
    pub fn from_field(value: Option<&FieldValue>) -> Option<ImagesRaw> {
        match value? {
            FieldValue::Text(s) => Some(ImagesRaw::One(s.clone())),
            FieldValue::TextList(items) => Some(ImagesRaw::Many(items.clone())),
            FieldValue::Other(Value::Object(map)) => {
                let entries: BTreeMap<String, String> = map
                    .iter()
                    .filter_map(|(k, v)| stringify_entry(v).map(|s| (k.clone(), s)))
                    .collect();
                Some(ImagesRaw::Keyed(entries))
            }
            FieldValue::Other(Value::Array(items)) => {
                let entries: Vec<String> =
                    items.iter().filter_map(stringify_entry).collect();
                Some(ImagesRaw::Many(entries))
            }
            _ => None,
        }
    }
}

fn stringify_entry(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Collapse any raw representation into one ordered list of URIs.
///
/// Keyed maps enumerate in key order, so the result is deterministic
/// for identical inputs. Normalizing an already-ordered list is a no-op.
pub fn normalize_images(raw: Option<ImagesRaw>) -> Vec<String> {
    match raw {
        None => Vec::new(),
        Some(ImagesRaw::Many(items)) => items,
        Some(ImagesRaw::One(s)) => {
            if s.trim().is_empty() {
                Vec::new()
            } else {
                vec![s]
            }
        }
        Some(ImagesRaw::Keyed(map)) => {
            map.into_values().filter(|s| !s.trim().is_empty()).collect()
        }
    }
}

/// A normalized image list plus the carousel cursor.
///
/// Invariant: `index` stays in `[0, len)` while non-empty; every
/// navigation call is inert on an empty sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageSequence {
    images: Vec<String>,
    index: usize,
}

impl ImageSequence {
    pub fn new(images: Vec<String>) -> Self {
        Self { images, index: 0 }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&str> {
        self.images.get(self.index).map(String::as_str)
    }

    /// Advance one image, wrapping past the end.
    pub fn next(&mut self) {
        if !self.images.is_empty() {
            self.index = (self.index + 1) % self.images.len();
        }
    }

    /// Step back one image, wrapping before the start.
    pub fn prev(&mut self) {
        if !self.images.is_empty() {
            self.index = (self.index + self.images.len() - 1) % self.images.len();
        }
    }

    /// Jump straight to a thumbnail. Out-of-range selections are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.images.len() {
            self.index = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(value: serde_json::Value) -> FieldValue {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_list_kept_as_is() {
        let raw = ImagesRaw::from_field(Some(&field(json!(["a.jpg", "b.jpg"]))));
        assert_eq!(
            normalize_images(raw),
            vec!["a.jpg".to_string(), "b.jpg".to_string()]
        );
    }

    #[test]
    fn test_single_string_wrapped() {
        let raw = ImagesRaw::from_field(Some(&field(json!("cover.jpg"))));
        assert_eq!(normalize_images(raw), vec!["cover.jpg".to_string()]);
    }

    #[test]
    fn test_keyed_map_values_in_key_order() {
        let raw = ImagesRaw::from_field(Some(&field(json!({
            "b": "y.jpg",
            "a": "x.jpg",
        }))));
        assert_eq!(
            normalize_images(raw),
            vec!["x.jpg".to_string(), "y.jpg".to_string()]
        );
    }

    #[test]
    fn test_keyed_map_drops_blank_and_container_entries() {
        let raw = ImagesRaw::from_field(Some(&field(json!({
            "a": "x.jpg",
            "b": "",
            "c": null,
            "d": {"nested": true},
        }))));
        assert_eq!(normalize_images(raw), vec!["x.jpg".to_string()]);
    }

    #[test]
    fn test_absent_and_unusable_shapes_are_empty() {
        assert!(normalize_images(None).is_empty());
        assert!(normalize_images(ImagesRaw::from_field(Some(&field(json!(42))))).is_empty());
        assert!(normalize_images(ImagesRaw::from_field(Some(&FieldValue::Null))).is_empty());
    }

    #[test]
    fn test_normalize_idempotent_over_ordered_list() {
        let once = normalize_images(Some(ImagesRaw::Many(vec![
            "a.jpg".to_string(),
            "b.jpg".to_string(),
        ])));
        let twice = normalize_images(Some(ImagesRaw::Many(once.clone())));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_carousel_wraps_both_directions() {
        let mut seq = ImageSequence::new(vec![
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
        ]);

        seq.prev();
        assert_eq!(seq.index(), 2);

        for _ in 0..3 {
            seq.next();
        }
        assert_eq!(seq.index(), 2);
        assert_eq!(seq.current(), Some("c"));
    }

    #[test]
    fn test_carousel_select_ignores_out_of_range() {
        let mut seq = ImageSequence::new(vec!["a".to_string(), "b".to_string()]);
        seq.select(1);
        assert_eq!(seq.index(), 1);
        seq.select(9);
        assert_eq!(seq.index(), 1);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut seq = ImageSequence::new(Vec::new());
        seq.next();
        seq.prev();
        seq.select(0);
        assert_eq!(seq.index(), 0);
        assert_eq!(seq.current(), None);
    }
}
