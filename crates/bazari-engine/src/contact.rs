use bazari_types::{Listing, OwnerProfile};
use serde::Serialize;

use crate::format::PLACEHOLDER;

/// Country every admin form seeds by default. A listing carrying it is
/// treated as unspecific and eligible for override by the owner's value.
pub const DEFAULT_COUNTRY: &str = "India";

/// Contact identity derived fresh on every render from listing + owner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedContact {
    pub display_name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub whatsapp: Option<String>,
    pub social_links: Vec<String>,
}

/// Location derived under the fallback rules below.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedLocation {
    pub country: String,
    pub state_province: String,
}

/// Resolve who to contact for a listing.
///
/// Display name chain, first non-blank wins: owner's composed full name,
/// owner's username, the listing's own contact-person field, placeholder.
/// Phone and email prefer the owner profile over the listing's fields.
/// `owner = None` is a legitimate input (fetch pending, or no owner) and
/// degrades to listing-only data.
pub fn resolve_contact(listing: &Listing, owner: Option<&OwnerProfile>) -> ResolvedContact {
    let display_name = owner
        .and_then(OwnerProfile::full_name)
        .or_else(|| {
            owner
                .and_then(|o| non_blank(o.username.as_deref()))
                .map(str::to_string)
        })
        .or_else(|| listing.text("contactPerson").map(str::to_string))
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    let phone = non_blank(owner.and_then(|o| o.phone.as_deref()))
        .or_else(|| listing.text("contactPhone"))
        .or_else(|| listing.text("phone"))
        .map(str::to_string);

    let email = non_blank(owner.and_then(|o| o.email.as_deref()))
        .or_else(|| listing.text("contactEmail"))
        .or_else(|| listing.text("email"))
        .map(str::to_string);

    let whatsapp = phone.as_deref().and_then(whatsapp_link);

    let social_links = owner.map(|o| o.social_links.clone()).unwrap_or_default();

    ResolvedContact {
        display_name,
        phone,
        email,
        whatsapp,
        social_links,
    }
}

/// Resolve the location line for a listing.
///
/// Country carries an asymmetric override: a listing stuck on the
/// default country yields to an owner whose country is more specific,
/// but any other listing value wins outright.
pub fn resolve_location(listing: &Listing, owner: Option<&OwnerProfile>) -> ResolvedLocation {
    let listing_country = listing.text("country");
    let owner_country = non_blank(owner.and_then(|o| o.country.as_deref()));

    let country = match (listing_country, owner_country) {
        (Some(lc), Some(oc))
            if lc.eq_ignore_ascii_case(DEFAULT_COUNTRY)
                && !oc.eq_ignore_ascii_case(DEFAULT_COUNTRY) =>
        {
            oc
        }
        (Some(lc), _) => lc,
        (None, Some(oc)) => oc,
        (None, None) => PLACEHOLDER,
    };

    let state_province = listing
        .text("stateProvince")
        .or_else(|| non_blank(owner.and_then(|o| o.state_province.as_deref())))
        .unwrap_or(PLACEHOLDER);

    ResolvedLocation {
        country: country.to_string(),
        state_province: state_province.to_string(),
    }
}

/// A wa.me link, built only when stripping the phone to digits leaves
/// something to dial.
fn whatsapp_link(phone: &str) -> Option<String> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        Some(format!("https://wa.me/{digits}"))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
