use std::collections::HashSet;

use bazari_types::Listing;

/// Options for one projection pass over a listing's key set.
#[derive(Debug, Clone, Default)]
pub struct Projection {
    /// Priority ordering hint; hint keys win, in hint order.
    pub preferred: Vec<String>,
    /// Keys never shown raw (identifiers, media blobs, long-form text).
    pub excluded: HashSet<String>,
    /// Case-insensitive substring filter over key names.
    pub filter_text: String,
    /// Show every key on the listing, bypassing hint and exclusions.
    pub show_all: bool,
}

impl Projection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preferred<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn excluded<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn filter_text(mut self, text: impl Into<String>) -> Self {
        self.filter_text = text.into();
        self
    }

    pub fn show_all(mut self, show_all: bool) -> Self {
        self.show_all = show_all;
        self
    }
}

/// Keys no category ever shows raw: identifiers, media blobs, and the
/// long-form description (surfaced separately by the view).
pub fn default_excluded_keys() -> HashSet<String> {
    ["id", "images", "description", "userId", "sellerId"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// The ordered, de-duplicated list of field keys to display.
///
/// Deterministic for identical inputs and total: an empty vec (never a
/// sentinel) comes back when nothing matches. Presence is existence,
/// not truthiness - a field holding `false` or `0` is still listed.
pub fn project_fields(listing: &Listing, projection: &Projection) -> Vec<String> {
    let selected: Vec<String> = if projection.show_all {
        // Every key on the listing, lexicographic.
        listing.keys().map(str::to_string).collect()
    } else {
        let derived = listing
            .keys()
            .filter(|key| !projection.excluded.contains(*key));

        let mut seen = HashSet::new();
        projection
            .preferred
            .iter()
            .map(String::as_str)
            .chain(derived)
            .filter(|key| !key.is_empty())
            .filter(|key| seen.insert(key.to_string()))
            .filter(|key| listing.contains_key(key))
            .map(str::to_string)
            .collect()
    };

    let needle = projection.filter_text.trim().to_lowercase();
    if needle.is_empty() {
        return selected;
    }
    selected
        .into_iter()
        .filter(|key| key.to_lowercase().contains(&needle))
        .collect()
}
