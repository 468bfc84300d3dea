// Engine module - pure projection/resolution logic over open listing records
// This layer sits between raw listing data (types) and the hosting view

pub mod contact;
pub mod features;
pub mod format;
pub mod images;
pub mod project;
pub mod view;

pub use contact::{ResolvedContact, ResolvedLocation, DEFAULT_COUNTRY};
pub use features::FeatureBadge;
pub use format::{format_value, Formatted, PLACEHOLDER};
pub use images::{ImageSequence, ImagesRaw};
pub use project::Projection;
pub use view::{ListingView, ViewConfig, ViewFilter};

use bazari_types::{Listing, OwnerProfile};

// Façade API - Stable public interface for the hosting view
// Callers should use these functions instead of reaching into modules

/// Ordered, de-duplicated, filterable field keys to display
pub fn project_fields(listing: &Listing, projection: &Projection) -> Vec<String> {
    project::project_fields(listing, projection)
}

/// Contact identity resolved from listing + optional owner profile
pub fn resolve_contact(listing: &Listing, owner: Option<&OwnerProfile>) -> ResolvedContact {
    contact::resolve_contact(listing, owner)
}

/// Location resolved from listing + optional owner profile
pub fn resolve_location(listing: &Listing, owner: Option<&OwnerProfile>) -> ResolvedLocation {
    contact::resolve_location(listing, owner)
}

/// Collapse any raw image representation into one ordered list
pub fn normalize_images(raw: Option<ImagesRaw>) -> Vec<String> {
    images::normalize_images(raw)
}

/// Boolean feature badges for the candidate keys present on the listing
pub fn resolve_features(listing: &Listing, candidates: &[String]) -> Vec<FeatureBadge> {
    features::resolve_features(listing, candidates)
}
