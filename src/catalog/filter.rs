//! Listing filter engine.
//!
//! One predicate set serves every listing page. What differs between pages
//! (sale/rent partition, pinned category, which text fields the location box
//! searches, the price bracket set, whether bathrooms can be filtered) lives
//! in a [`FilterProfile`]. What the user picked lives in [`SearchCriteria`].
//!
//! [`filter`] is pure: it never mutates its input, never invents listings and
//! keeps the input order.

use crate::domain::{CeylandError, FieldErrors, Listing, ListingType, Result};

/// Half-open price range `[min, max)`; `max = None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBracket {
    /// Form token, e.g. `500000-1000000` or `3000+`.
    pub token: &'static str,
    pub label: &'static str,
    pub min: u64,
    pub max: Option<u64>,
}

impl PriceBracket {
    #[must_use]
    pub fn contains(&self, price: u64) -> bool {
        price >= self.min && self.max.map_or(true, |max| price < max)
    }
}

const SALE_BRACKETS: [PriceBracket; 4] = [
    PriceBracket { token: "0-500000", label: "Under $500K", min: 0, max: Some(500_000) },
    PriceBracket { token: "500000-1000000", label: "$500K - $1M", min: 500_000, max: Some(1_000_000) },
    PriceBracket { token: "1000000-2000000", label: "$1M - $2M", min: 1_000_000, max: Some(2_000_000) },
    PriceBracket { token: "2000000+", label: "$2M+", min: 2_000_000, max: None },
];

const RENT_BRACKETS: [PriceBracket; 4] = [
    PriceBracket { token: "0-1000", label: "Under $1,000", min: 0, max: Some(1000) },
    PriceBracket { token: "1000-2000", label: "$1,000 - $2,000", min: 1000, max: Some(2000) },
    PriceBracket { token: "2000-3000", label: "$2,000 - $3,000", min: 2000, max: Some(3000) },
    PriceBracket { token: "3000+", label: "$3,000+", min: 3000, max: None },
];

/// Which price brackets a page offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketSet {
    Sale,
    Rent,
}

impl BracketSet {
    #[must_use]
    pub const fn brackets(self) -> &'static [PriceBracket] {
        match self {
            Self::Sale => &SALE_BRACKETS,
            Self::Rent => &RENT_BRACKETS,
        }
    }

    /// Resolves a form token. `all` (or empty) means no price filter.
    ///
    /// # Errors
    ///
    /// Returns [`CeylandError::UnknownBracket`] if the token is not one of
    /// this set's brackets.
    pub fn lookup(self, token: &str) -> Result<Option<PriceBracket>> {
        let token = token.trim();
        if token.is_empty() || token.eq_ignore_ascii_case("all") {
            return Ok(None);
        }
        self.brackets()
            .iter()
            .find(|b| b.token == token)
            .copied()
            .map(Some)
            .ok_or_else(|| CeylandError::UnknownBracket(token.to_string()))
    }
}

/// User-chosen category, or the `all` wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    All,
    Only(String),
}

impl TypeFilter {
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if token.is_empty() || token.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(token.to_string())
        }
    }

    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        match self {
            Self::All => true,
            Self::Only(property_type) => listing.is_type(property_type),
        }
    }
}

/// Parses a minimum-count select value: `all`/`any` → `None`, `3` or `3+` → `Some(3)`.
///
/// # Errors
///
/// Returns [`CeylandError::Validation`] keyed by `field` when the token is not a count.
pub fn parse_minimum(field: &'static str, token: &str) -> Result<Option<u32>> {
    let token = token.trim();
    if token.is_empty() || token.eq_ignore_ascii_case("all") || token.eq_ignore_ascii_case("any") {
        return Ok(None);
    }
    token.trim_end_matches('+').parse::<u32>().map(Some).map_err(|_| {
        let mut errors = FieldErrors::new();
        errors.insert(field, format!("'{token}' is not a valid minimum"));
        CeylandError::Validation(errors)
    })
}

/// Transient, page-local search state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    /// Case-insensitive substring; empty matches everything.
    pub location: String,
    pub property_type: TypeFilter,
    pub price: Option<PriceBracket>,
    pub min_bedrooms: Option<u32>,
    pub min_bathrooms: Option<u32>,
}

impl SearchCriteria {
    /// True when no user filter is active.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// Which listing text the location box searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationScope {
    Location,
    LocationOrTitle,
}

/// Per-page filter configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterProfile {
    /// Applied before any user criterion. `None` shows both partitions.
    pub partition: Option<ListingType>,
    /// Category the page is dedicated to; combines with the user's type choice.
    pub type_pin: Option<&'static str>,
    pub location_scope: LocationScope,
    pub brackets: BracketSet,
    /// Whether the page exposes a type select at all.
    pub user_type: bool,
    /// Whether the page exposes a bathrooms select at all.
    pub bathrooms: bool,
}

impl FilterProfile {
    /// Home page grid: sale listings, location-only text search.
    #[must_use]
    pub const fn home() -> Self {
        Self {
            partition: Some(ListingType::Sale),
            type_pin: None,
            location_scope: LocationScope::Location,
            brackets: BracketSet::Sale,
            user_type: true,
            bathrooms: false,
        }
    }

    #[must_use]
    pub const fn rentals() -> Self {
        Self {
            partition: Some(ListingType::Rent),
            type_pin: None,
            location_scope: LocationScope::LocationOrTitle,
            brackets: BracketSet::Rent,
            user_type: true,
            bathrooms: true,
        }
    }

    /// A sale page dedicated to one category, or to every category when `pin` is `None`.
    #[must_use]
    pub const fn for_sale(pin: Option<&'static str>) -> Self {
        Self {
            partition: Some(ListingType::Sale),
            type_pin: pin,
            location_scope: LocationScope::LocationOrTitle,
            brackets: BracketSet::Sale,
            user_type: false,
            bathrooms: false,
        }
    }

    #[must_use]
    pub const fn buy() -> Self {
        Self {
            partition: Some(ListingType::Sale),
            type_pin: None,
            location_scope: LocationScope::LocationOrTitle,
            brackets: BracketSet::Sale,
            user_type: true,
            bathrooms: false,
        }
    }
}

/// Tests one listing against the page profile and the user's criteria.
#[must_use]
pub fn matches(listing: &Listing, criteria: &SearchCriteria, profile: &FilterProfile) -> bool {
    if profile.partition.is_some_and(|p| p != listing.listing_type) {
        return false;
    }

    if profile.type_pin.is_some_and(|pin| !listing.is_type(pin)) {
        return false;
    }

    let query = criteria.location.trim().to_lowercase();
    if !query.is_empty() {
        let in_location = listing.location.to_lowercase().contains(&query);
        let in_title = profile.location_scope == LocationScope::LocationOrTitle
            && listing.title.to_lowercase().contains(&query);
        if !in_location && !in_title {
            return false;
        }
    }

    if profile.user_type && !criteria.property_type.matches(listing) {
        return false;
    }

    if criteria.price.is_some_and(|bracket| !bracket.contains(listing.price)) {
        return false;
    }

    if criteria.min_bedrooms.is_some_and(|min| listing.bedrooms < min) {
        return false;
    }

    !(profile.bathrooms && criteria.min_bathrooms.is_some_and(|min| listing.bathrooms < min))
}

/// Returns the listings that pass every active predicate, in input order.
#[must_use]
pub fn filter(listings: &[Listing], criteria: &SearchCriteria, profile: &FilterProfile) -> Vec<Listing> {
    let _span = tracing::debug_span!("filter_listings",
        total = listings.len(),
        partition = ?profile.partition,
        type_pin = ?profile.type_pin
    )
    .entered();

    let matched: Vec<Listing> = listings
        .iter()
        .filter(|listing| matches(listing, criteria, profile))
        .cloned()
        .collect();

    tracing::debug!(matched = matched.len(), "listings filtered");
    matched
}
