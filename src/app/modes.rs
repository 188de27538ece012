//! Page, modal and dashboard-tab state types.
//!
//! These closed enums decide what the user is looking at. [`Page`] is the
//! public-site navigation state and carries each page's filter profile and
//! sort options. [`Modal`] is the single overlay that may be open on top of
//! it. [`AdminTab`] selects the back-office view.
//!
//! # Example
//!
//! ```rust
//! use ceyland::app::modes::Page;
//!
//! let page = Page::parse("houses").unwrap();
//! assert_eq!(page.title(), "Houses For Sale");
//! assert!(page.filter_profile().is_some());
//! ```

use crate::catalog::{FilterProfile, SortKey};
use crate::domain::{CeylandError, ListingId, Result};

/// Public-site page. Exactly one is active; the site opens on [`Page::Home`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    Rentals,
    Houses,
    Commercial,
    Apartments,
    Villas,
    AllProperties,
    SellProperty,
    BuyProperty,
}

const RENTAL_SORTS: [SortKey; 4] = [SortKey::Newest, SortKey::PriceLow, SortKey::PriceHigh, SortKey::Beds];
const BUY_SORTS: [SortKey; 3] = [SortKey::Featured, SortKey::PriceLow, SortKey::PriceHigh];

impl Page {
    pub const ALL: [Self; 9] = [
        Self::Home,
        Self::Rentals,
        Self::Houses,
        Self::Commercial,
        Self::Apartments,
        Self::Villas,
        Self::AllProperties,
        Self::SellProperty,
        Self::BuyProperty,
    ];

    /// Parses a page name. Accepts the camelCase names and dashed aliases.
    ///
    /// # Errors
    ///
    /// Returns [`CeylandError::UnknownPage`] for anything else.
    pub fn parse(token: &str) -> Result<Self> {
        let normalized = token.trim().to_lowercase().replace(['-', '_'], "");
        match normalized.as_str() {
            "home" => Ok(Self::Home),
            "rentals" | "rent" => Ok(Self::Rentals),
            "houses" => Ok(Self::Houses),
            "commercial" => Ok(Self::Commercial),
            "apartments" => Ok(Self::Apartments),
            "villas" => Ok(Self::Villas),
            "allproperties" | "all" => Ok(Self::AllProperties),
            "sellproperty" | "sell" => Ok(Self::SellProperty),
            "buyproperty" | "buy" => Ok(Self::BuyProperty),
            _ => Err(CeylandError::UnknownPage(token.to_string())),
        }
    }

    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Rentals => "rentals",
            Self::Houses => "houses",
            Self::Commercial => "commercial",
            Self::Apartments => "apartments",
            Self::Villas => "villas",
            Self::AllProperties => "allProperties",
            Self::SellProperty => "sellProperty",
            Self::BuyProperty => "buyProperty",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Find Your Dream Home Today",
            Self::Rentals => "Homes For Rent",
            Self::Houses => "Houses For Sale",
            Self::Commercial => "Commercial Lands For Sale",
            Self::Apartments => "Apartments For Sale",
            Self::Villas => "Villas For Sale",
            Self::AllProperties => "All Properties For Sale",
            Self::SellProperty => "Sell Your Property",
            Self::BuyProperty => "Buy New Property",
        }
    }

    /// Filter configuration for pages that show a listing grid.
    #[must_use]
    pub const fn filter_profile(self) -> Option<FilterProfile> {
        match self {
            Self::Home => Some(FilterProfile::home()),
            Self::Rentals => Some(FilterProfile::rentals()),
            Self::Houses => Some(FilterProfile::for_sale(Some("House"))),
            Self::Commercial => Some(FilterProfile::for_sale(Some("Commercial"))),
            Self::Apartments => Some(FilterProfile::for_sale(Some("Apartment"))),
            Self::Villas => Some(FilterProfile::for_sale(Some("Villa"))),
            Self::AllProperties => Some(FilterProfile::for_sale(None)),
            Self::BuyProperty => Some(FilterProfile::buy()),
            Self::SellProperty => None,
        }
    }

    /// Orderings the page offers; empty when results keep catalog order.
    #[must_use]
    pub const fn sort_keys(self) -> &'static [SortKey] {
        match self {
            Self::Rentals => &RENTAL_SORTS,
            Self::BuyProperty => &BUY_SORTS,
            _ => &[],
        }
    }

    #[must_use]
    pub const fn default_sort(self) -> Option<SortKey> {
        match self {
            Self::Rentals => Some(SortKey::Newest),
            Self::BuyProperty => Some(SortKey::Featured),
            _ => None,
        }
    }

    /// Result count line shown above the grid.
    #[must_use]
    pub fn count_label(self, count: usize) -> String {
        let one = count == 1;
        match self {
            Self::Home => format!("{count} {} found", if one { "property" } else { "properties" }),
            Self::Rentals => format!("{count} results"),
            Self::BuyProperty => format!("{count} {} Available", if one { "Property" } else { "Properties" }),
            _ => format!("{count} {} Found", if one { "Property" } else { "Properties" }),
        }
    }
}

/// Sign-in dialog variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

/// Overlay dialog. At most one is open at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Auth(AuthMode),
    AdminLogin,
    PostAd,
    /// Back-office listing editor; `None` adds a new listing.
    ListingEditor(Option<ListingId>),
}

/// Back-office dashboard tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Properties,
    Users,
    Settings,
}

impl AdminTab {
    /// # Errors
    ///
    /// Returns [`CeylandError::UnknownPage`] for an unknown tab name.
    pub fn parse(token: &str) -> Result<Self> {
        match token.trim().to_lowercase().as_str() {
            "properties" => Ok(Self::Properties),
            "users" => Ok(Self::Users),
            "settings" => Ok(Self::Settings),
            _ => Err(CeylandError::UnknownPage(token.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_token_parses_back() {
        for page in Page::ALL {
            assert_eq!(Page::parse(page.token()).unwrap(), page);
        }
        assert_eq!(Page::parse("buy-property").unwrap(), Page::BuyProperty);
        assert!(matches!(Page::parse("offices"), Err(CeylandError::UnknownPage(_))));
    }

    #[test]
    fn only_sell_page_has_no_grid() {
        for page in Page::ALL {
            assert_eq!(page.filter_profile().is_none(), page == Page::SellProperty);
        }
    }

    #[test]
    fn default_sort_is_offered() {
        for page in Page::ALL {
            if let Some(key) = page.default_sort() {
                assert!(page.sort_keys().contains(&key));
            } else {
                assert!(page.sort_keys().is_empty());
            }
        }
    }

    #[test]
    fn count_labels_are_singular_aware() {
        assert_eq!(Page::Home.count_label(1), "1 property found");
        assert_eq!(Page::Home.count_label(9), "9 properties found");
        assert_eq!(Page::Villas.count_label(0), "0 Properties Found");
        assert_eq!(Page::BuyProperty.count_label(1), "1 Property Available");
        assert_eq!(Page::Rentals.count_label(3), "3 results");
        assert_eq!(Page::Rentals.count_label(1), "1 results");
    }
}
