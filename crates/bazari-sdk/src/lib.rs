//! bazari-sdk: hosting API for classifieds listing detail views.
//!
//! # Overview
//!
//! `bazari-sdk` is the surface a hosting view talks to. It wraps the pure
//! projection engine (`bazari-engine`) with the pieces a real view needs:
//! an async owner-profile fetch with stale-response protection, per-view
//! session state, and per-category presentation config.
//!
//! # Quickstart
//!
//! ```no_run
//! use bazari_sdk::{Client, Listing, ViewConfig, ViewSession};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let listing = Listing::from_value(serde_json::json!({
//!     "title": "Evening Yoga Batch",
//!     "userId": "u-42",
//!     "images": ["cover.jpg"],
//!     "contactPerson": "Sita",
//!     "country": "India",
//! }))?;
//!
//! let mut session = ViewSession::new(listing, ViewConfig::default());
//!
//! // The view renders immediately; the owner fetch only improves it.
//! let client = Client::new();
//! client.hydrate(&mut session).await;
//!
//! let view = session.view();
//! println!("{} ({})", view.title(), view.contact().display_name);
//! for key in view.visible_fields() {
//!     println!("{}: {}", view.label(&key), view.field(&key).as_str());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! This SDK acts as a facade over:
//! - `bazari-types`: the open listing record and owner profile
//! - `bazari-engine`: field projection, contact/location resolution,
//!   image normalization, feature badges
//!
//! Everything in the engine is synchronous and total; the only
//! suspension point is the owner fetch, and every accessor works before
//! it resolves.

pub mod client;
pub mod config;
mod error;
mod session;

pub use client::{Client, ClientConfig};
pub use config::{slugify, ConfigRegistry};
pub use error::{Error, Result};
pub use session::{FetchTicket, ViewSession};

// Re-export the engine surface the hosting view consumes.
pub use bazari_engine::{
    format_value, normalize_images, project_fields, resolve_contact, resolve_features,
    resolve_location, FeatureBadge, Formatted, ImageSequence, ImagesRaw, ListingView,
    Projection, ResolvedContact, ResolvedLocation, ViewConfig, ViewFilter,
};
pub use bazari_types::{humanize_key, owner_id_of, FieldValue, Listing, OwnerProfile};
