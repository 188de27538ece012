//! Listing domain model.
//!
//! A [`Listing`] is one property record in the catalog. Listings are never
//! mutated field by field from outside the catalog: they are created from a
//! [`ListingDraft`], replaced through a [`ListingPatch`], or removed.

use serde::{Deserialize, Serialize};

/// Catalog-assigned listing identifier. Higher ids were added later.
pub type ListingId = u64;

/// Image shown when a submitter leaves the image URL empty.
pub const DEFAULT_IMAGE: &str = "https://images.unsplash.com/photo-1570129477492-45c003edd2be?w=800";

/// Whether a listing is offered for sale or for monthly rent.
///
/// Fixed when the listing is created; edits cannot move a listing between
/// the sale and rental partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Sale,
    Rent,
}

impl ListingType {
    /// Parses the form token (`sale` / `rent`), ignoring case.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "sale" => Some(Self::Sale),
            "rent" => Some(Self::Rent),
            _ => None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sale => "For Sale",
            Self::Rent => "For Rent",
        }
    }
}

/// A property record.
///
/// Serialized with the field names used by seed files (`type`,
/// `listingType`), so a seed catalog can be written by hand as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    /// Sale price, or monthly rent for [`ListingType::Rent`].
    pub price: u64,
    pub location: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Floor or plot area in square feet.
    pub area: u32,
    pub image: String,
    /// Free-form category such as House, Apartment, Villa, Commercial, Land.
    #[serde(rename = "type")]
    pub property_type: String,
    #[serde(default)]
    pub featured: bool,
    pub listing_type: ListingType,
}

impl Listing {
    /// Builds a listing from a draft and the id the catalog allocated for it.
    #[must_use]
    pub fn from_draft(id: ListingId, draft: ListingDraft) -> Self {
        Self {
            id,
            title: draft.title,
            price: draft.price,
            location: draft.location,
            bedrooms: draft.bedrooms,
            bathrooms: draft.bathrooms,
            area: draft.area,
            image: draft.image,
            property_type: draft.property_type,
            featured: draft.featured,
            listing_type: draft.listing_type,
        }
    }

    /// Case-insensitive comparison against the listing's category.
    #[must_use]
    pub fn is_type(&self, property_type: &str) -> bool {
        self.property_type.eq_ignore_ascii_case(property_type.trim())
    }

    /// Price as shown on cards: `$1,250,000` for sales, `$2,500/mo` for rentals.
    #[must_use]
    pub fn price_label(&self) -> String {
        let amount = format_currency(self.price);
        match self.listing_type {
            ListingType::Sale => amount,
            ListingType::Rent => format!("{amount}/mo"),
        }
    }
}

/// A listing before the catalog has assigned it an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingDraft {
    pub title: String,
    pub price: u64,
    pub location: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub area: u32,
    pub image: String,
    pub property_type: String,
    pub featured: bool,
    pub listing_type: ListingType,
}

/// Field-wise replacement for an existing listing.
///
/// `None` leaves the field untouched. There is deliberately no `id` or
/// `listing_type` field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPatch {
    pub title: Option<String>,
    pub price: Option<u64>,
    pub location: Option<String>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub area: Option<u32>,
    pub image: Option<String>,
    pub property_type: Option<String>,
    pub featured: Option<bool>,
}

impl ListingPatch {
    /// Merges the present fields into `listing`.
    pub fn apply_to(&self, listing: &mut Listing) {
        if let Some(title) = &self.title {
            listing.title.clone_from(title);
        }
        if let Some(price) = self.price {
            listing.price = price;
        }
        if let Some(location) = &self.location {
            listing.location.clone_from(location);
        }
        if let Some(bedrooms) = self.bedrooms {
            listing.bedrooms = bedrooms;
        }
        if let Some(bathrooms) = self.bathrooms {
            listing.bathrooms = bathrooms;
        }
        if let Some(area) = self.area {
            listing.area = area;
        }
        if let Some(image) = &self.image {
            listing.image.clone_from(image);
        }
        if let Some(property_type) = &self.property_type {
            listing.property_type.clone_from(property_type);
        }
        if let Some(featured) = self.featured {
            listing.featured = featured;
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Formats a whole-dollar amount with thousands separators: `1250000` → `$1,250,000`.
#[must_use]
pub fn format_currency(amount: u64) -> String {
    format!("${}", format_thousands(amount))
}

/// Groups digits in threes: `15000` → `15,000`.
#[must_use]
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
