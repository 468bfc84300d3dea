use serde::{Deserialize, Serialize};

use bazari_types::{humanize_key, owner_id_of, Listing, OwnerProfile};

use crate::contact::{self, ResolvedContact, ResolvedLocation};
use crate::features::{self, FeatureBadge};
use crate::format::{self, Formatted, PLACEHOLDER};
use crate::images::{normalize_images, ImageSequence, ImagesRaw};
use crate::project::{self, Projection};

/// Per-category presentation hints: which field is the headline, which
/// keys lead the details grid, which flags earn badges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub title_field: String,
    pub subtitle_field: String,
    pub preferred_fields: Vec<String>,
    pub feature_keys: Vec<String>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            title_field: "title".to_string(),
            subtitle_field: "contactPerson".to_string(),
            preferred_fields: [
                "listingType",
                "subjectCategory",
                "teachingMode",
                "classType",
                "tutorQualification",
                "tutorExperienceYears",
                "gradeLevel",
                "minGrade",
                "maxGrade",
                "board",
                "batchSize",
                "feePerMonth",
                "feePerHour",
                "feePerSubject",
                "country",
                "stateProvince",
                "city",
                "areaName",
                "fullAddress",
                "isActive",
                "isFeatured",
                "viewCount",
                "createdAt",
                "updatedAt",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
            feature_keys: [
                "demoClassAvailable",
                "studyMaterialProvided",
                "testSeriesIncluded",
                "doubtClearingSessions",
                "flexibleTimings",
                "weekendClasses",
                "homeTuitionAvailable",
                "onlineClassesAvailable",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
        }
    }
}

/// Transient filter state, scoped to one open detail view and discarded
/// on navigation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewFilter {
    pub show_all: bool,
    pub filter_text: String,
}

/// One open detail view: a listing, the owner profile once fetched, the
/// field filter, and the image carousel.
///
/// Everything here is synchronous and owner-optional; accessors re-run
/// after `set_owner` and supersede earlier results without accumulating
/// state. The source listing is never mutated.
#[derive(Debug, Clone)]
pub struct ListingView {
    listing: Listing,
    owner: Option<OwnerProfile>,
    config: ViewConfig,
    pub filter: ViewFilter,
    pub gallery: ImageSequence,
}

const FEE_FIELDS: [(&str, &str); 3] = [
    ("feePerMonth", "/month"),
    ("feePerHour", "/hr"),
    ("feePerSubject", "/subject"),
];

const LOCATION_FIELDS: [&str; 4] = ["areaName", "city", "stateProvince", "country"];

impl ListingView {
    pub fn new(listing: Listing, config: ViewConfig) -> Self {
        let gallery =
            ImageSequence::new(normalize_images(ImagesRaw::from_field(listing.get("images"))));
        Self {
            listing,
            owner: None,
            config,
            filter: ViewFilter::default(),
            gallery,
        }
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn owner(&self) -> Option<&OwnerProfile> {
        self.owner.as_ref()
    }

    pub fn owner_id(&self) -> Option<&str> {
        owner_id_of(&self.listing)
    }

    /// Attach (or clear) the fetched owner profile. Contact and location
    /// re-resolve on the next call with the updated input.
    pub fn set_owner(&mut self, owner: Option<OwnerProfile>) {
        self.owner = owner;
    }

    /// Headline: configured title field, a `name` field, or a static
    /// fallback so an arbitrarily sparse listing still renders.
    pub fn title(&self) -> String {
        self.listing
            .text(&self.config.title_field)
            .or_else(|| self.listing.text("name"))
            .unwrap_or("Details")
            .to_string()
    }

    pub fn subtitle(&self) -> Option<String> {
        self.listing
            .text(&self.config.subtitle_field)
            .map(str::to_string)
    }

    pub fn description(&self) -> Option<&str> {
        self.listing.text("description")
    }

    /// Ordered field keys for the details grid, honoring the view's
    /// filter state. Title and subtitle keys lead the hint.
    pub fn visible_fields(&self) -> Vec<String> {
        let mut preferred =
            Vec::with_capacity(self.config.preferred_fields.len() + 2);
        preferred.push(self.config.title_field.clone());
        preferred.push(self.config.subtitle_field.clone());
        preferred.extend(self.config.preferred_fields.iter().cloned());

        let projection = Projection {
            preferred,
            excluded: project::default_excluded_keys(),
            filter_text: self.filter.filter_text.clone(),
            show_all: self.filter.show_all,
        };
        project::project_fields(&self.listing, &projection)
    }

    /// Display form of one field's value.
    pub fn field(&self, key: &str) -> Formatted {
        format::format_value(self.listing.get(key))
    }

    /// Display label for one field key.
    pub fn label(&self, key: &str) -> String {
        humanize_key(key)
    }

    pub fn contact(&self) -> ResolvedContact {
        contact::resolve_contact(&self.listing, self.owner.as_ref())
    }

    pub fn location(&self) -> ResolvedLocation {
        contact::resolve_location(&self.listing, self.owner.as_ref())
    }

    pub fn features(&self) -> Vec<FeatureBadge> {
        features::resolve_features(&self.listing, &self.config.feature_keys)
    }

    /// Headline fee: first of the fee fields that carries an amount,
    /// with its unit suffix.
    pub fn fee_line(&self) -> Option<String> {
        FEE_FIELDS.iter().find_map(|(key, suffix)| {
            let value = self.listing.get(key)?;
            if !value.is_truthy() {
                return None;
            }
            let amount = value.as_f64()?;
            Some(format!("₹{}{}", group_thousands(amount), suffix))
        })
    }

    /// Composite location line: area, city, state, country.
    pub fn location_line(&self) -> String {
        let parts: Vec<&str> = LOCATION_FIELDS
            .iter()
            .filter_map(|key| self.listing.text(key))
            .collect();
        if parts.is_empty() {
            PLACEHOLDER.to_string()
        } else {
            parts.join(", ")
        }
    }

    /// The whole listing, pretty-printed. Debug affordance of the
    /// original detail view.
    pub fn raw_json(&self) -> String {
        serde_json::to_string_pretty(&self.listing).unwrap_or_default()
    }
}

fn group_thousands(amount: f64) -> String {
    let negative = amount < 0.0;
    let digits = (amount.abs().round() as u64).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let formatted: String = grouped.chars().rev().collect();
    if negative {
        format!("-{formatted}")
    } else {
        formatted
    }
}
