//! Listing ordering.
//!
//! All orderings are stable: listings that compare equal keep their input
//! order, and there is no secondary key.

use crate::domain::{CeylandError, Listing, Result};

/// Orderings offered by the rentals and buy pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    PriceLow,
    PriceHigh,
    /// Featured listings first.
    Featured,
    /// Most bedrooms first.
    Beds,
    /// Highest id first.
    Newest,
}

impl SortKey {
    /// Parses the select value (`price-low`, `price-high`, `featured`, `beds`, `newest`).
    ///
    /// # Errors
    ///
    /// Returns [`CeylandError::UnknownSortKey`] for any other token.
    pub fn parse(token: &str) -> Result<Self> {
        match token.trim().to_lowercase().as_str() {
            "price-low" => Ok(Self::PriceLow),
            "price-high" => Ok(Self::PriceHigh),
            "featured" => Ok(Self::Featured),
            "beds" => Ok(Self::Beds),
            "newest" => Ok(Self::Newest),
            _ => Err(CeylandError::UnknownSortKey(token.to_string())),
        }
    }

    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Featured => "featured",
            Self::Beds => "beds",
            Self::Newest => "newest",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Featured => "Featured",
            Self::Beds => "Bedrooms",
            Self::Newest => "Newest",
        }
    }
}

/// Returns a reordered copy of `listings`; the input is left untouched.
#[must_use]
pub fn sort(listings: &[Listing], key: SortKey) -> Vec<Listing> {
    let mut ordered = listings.to_vec();
    match key {
        SortKey::PriceLow => ordered.sort_by_key(|l| l.price),
        SortKey::PriceHigh => ordered.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Featured => ordered.sort_by_key(|l| !l.featured),
        SortKey::Beds => ordered.sort_by(|a, b| b.bedrooms.cmp(&a.bedrooms)),
        SortKey::Newest => ordered.sort_by(|a, b| b.id.cmp(&a.id)),
    }
    tracing::trace!(key = key.token(), count = ordered.len(), "listings sorted");
    ordered
}
