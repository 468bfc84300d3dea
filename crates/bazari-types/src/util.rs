use once_cell::sync::Lazy;
use regex::Regex;

use crate::Listing;

static CAMEL_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());
static ACRONYM_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());
static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[_\-\s]+").unwrap());

/// Resolve the owner id a listing carries, checked once per view.
///
/// Different category forms stored it under `userId` or `sellerId`;
/// this is the single place that knows both spellings.
pub fn owner_id_of(listing: &Listing) -> Option<&str> {
    listing.text("userId").or_else(|| listing.text("sellerId"))
}

/// Turn a raw field key into a display label:
/// `feePerMonth` → `Fee Per Month`, `contact_person` → `Contact Person`.
pub fn humanize_key(key: &str) -> String {
    let spaced = ACRONYM_BOUNDARY.replace_all(key, "$1 $2");
    let spaced = CAMEL_BOUNDARY.replace_all(&spaced, "$1 $2");
    let words = SEPARATORS.replace_all(&spaced, " ");

    words
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
