use bazari_types::Listing;
use serde::Serialize;

/// One on/off indicator for a boolean-flag field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureBadge {
    pub key: String,
    pub active: bool,
}

/// Keep the candidate keys present on the listing, in candidate order.
///
/// Presence is existence, not truthiness: a flag stored as `false`
/// still shows, as an inactive badge, rather than disappearing.
pub fn resolve_features(listing: &Listing, candidates: &[String]) -> Vec<FeatureBadge> {
    candidates
        .iter()
        .filter_map(|key| {
            listing.get(key).map(|value| FeatureBadge {
                key: key.clone(),
                active: value.is_truthy(),
            })
        })
        .collect()
}
