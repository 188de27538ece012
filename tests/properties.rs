//! Filter and sort laws checked over a grid of criteria on the seed catalog.

use ceyland::app::Page;
use ceyland::catalog::{
    filter, initial_listings, sort, BracketSet, FilterProfile, SearchCriteria, SortKey, TypeFilter,
};
use ceyland::domain::{Listing, ListingType};

const SALE_BOUNDS: [(&str, u64, Option<u64>); 4] = [
    ("0-500000", 0, Some(500_000)),
    ("500000-1000000", 500_000, Some(1_000_000)),
    ("1000000-2000000", 1_000_000, Some(2_000_000)),
    ("2000000+", 2_000_000, None),
];

const RENT_BOUNDS: [(&str, u64, Option<u64>); 4] = [
    ("0-1000", 0, Some(1000)),
    ("1000-2000", 1000, Some(2000)),
    ("2000-3000", 2000, Some(3000)),
    ("3000+", 3000, None),
];

/// One point of the criteria grid, kept in plain values so the expected
/// result can be worked out without the crate's predicate.
#[derive(Debug, Clone)]
struct Case {
    location: &'static str,
    property_type: Option<&'static str>,
    bracket: Option<(&'static str, u64, Option<u64>)>,
    min_bedrooms: Option<u32>,
    min_bathrooms: Option<u32>,
}

impl Case {
    fn criteria(&self, brackets: BracketSet) -> SearchCriteria {
        SearchCriteria {
            location: self.location.to_string(),
            property_type: self.property_type.map_or(TypeFilter::All, TypeFilter::parse),
            price: self.bracket.and_then(|(token, _, _)| brackets.lookup(token).unwrap()),
            min_bedrooms: self.min_bedrooms,
            min_bathrooms: self.min_bathrooms,
        }
    }
}

fn grid_pages() -> Vec<(Page, FilterProfile)> {
    Page::ALL
        .iter()
        .filter_map(|page| page.filter_profile().map(|profile| (*page, profile)))
        .collect()
}

fn cases(page: Page) -> Vec<Case> {
    let bounds = if page == Page::Rentals { RENT_BOUNDS } else { SALE_BOUNDS };
    let mut grid = Vec::new();
    for bracket in std::iter::once(None).chain(bounds.into_iter().map(Some)) {
        for location in ["", "ca", "Miami", "tx", "villa"] {
            for property_type in [None, Some("Villa"), Some("house")] {
                for min_bedrooms in [None, Some(3)] {
                    for min_bathrooms in [None, Some(2)] {
                        grid.push(Case {
                            location,
                            property_type,
                            bracket,
                            min_bedrooms,
                            min_bathrooms,
                        });
                    }
                }
            }
        }
    }
    grid
}

/// The page rules written out longhand, one page at a time.
fn allowed(page: Page, listing: &Listing, case: &Case) -> bool {
    let wanted_partition = if page == Page::Rentals { ListingType::Rent } else { ListingType::Sale };
    if listing.listing_type != wanted_partition {
        return false;
    }

    let pinned = match page {
        Page::Houses => Some("house"),
        Page::Commercial => Some("commercial"),
        Page::Apartments => Some("apartment"),
        Page::Villas => Some("villa"),
        _ => None,
    };
    if pinned.is_some_and(|pin| listing.property_type.to_lowercase() != pin) {
        return false;
    }

    let needle = case.location.to_lowercase();
    let searches_title = page != Page::Home;
    if !needle.is_empty()
        && !listing.location.to_lowercase().contains(&needle)
        && !(searches_title && listing.title.to_lowercase().contains(&needle))
    {
        return false;
    }

    let user_type = matches!(page, Page::Home | Page::Rentals | Page::BuyProperty);
    if let (true, Some(kind)) = (user_type, case.property_type) {
        if listing.property_type.to_lowercase() != kind.to_lowercase() {
            return false;
        }
    }

    if let Some((_, min, max)) = case.bracket {
        if listing.price < min || max.is_some_and(|max| listing.price >= max) {
            return false;
        }
    }

    if case.min_bedrooms.is_some_and(|min| listing.bedrooms < min) {
        return false;
    }

    !(page == Page::Rentals && case.min_bathrooms.is_some_and(|min| listing.bathrooms < min))
}

#[test]
fn filter_returns_exactly_the_listings_the_page_rules_allow() {
    let listings = initial_listings();
    for (page, profile) in grid_pages() {
        for case in cases(page) {
            let result: Vec<u64> = filter(&listings, &case.criteria(profile.brackets), &profile)
                .iter()
                .map(|l| l.id)
                .collect();
            let expected: Vec<u64> = listings
                .iter()
                .filter(|l| allowed(page, l, &case))
                .map(|l| l.id)
                .collect();
            assert_eq!(result, expected, "{page:?} {case:?}");
        }
    }
}

#[test]
fn grid_reaches_both_empty_and_non_empty_results() {
    let listings = initial_listings();
    let (mut empty, mut non_empty) = (0, 0);
    for (page, profile) in grid_pages() {
        for case in cases(page) {
            if filter(&listings, &case.criteria(profile.brackets), &profile).is_empty() {
                empty += 1;
            } else {
                non_empty += 1;
            }
        }
    }
    assert!(empty > 0 && non_empty > 0);
}

#[test]
fn filter_is_idempotent() {
    let listings = initial_listings();
    for (page, profile) in grid_pages() {
        for case in cases(page) {
            let criteria = case.criteria(profile.brackets);
            let once = filter(&listings, &criteria, &profile);
            assert_eq!(filter(&once, &criteria, &profile), once);
        }
    }
}

#[test]
fn filter_leaves_input_untouched() {
    let listings = initial_listings();
    let _ = filter(&listings, &SearchCriteria::default(), &FilterProfile::rentals());
    assert_eq!(listings, initial_listings());
}

#[test]
fn price_low_and_high_are_reverses() {
    let listings = initial_listings();
    let low = sort(&listings, SortKey::PriceLow);
    let high = sort(&low, SortKey::PriceHigh);

    let low_prices: Vec<u64> = low.iter().map(|l| l.price).collect();
    let mut high_prices: Vec<u64> = high.iter().map(|l| l.price).collect();
    high_prices.reverse();
    assert_eq!(low_prices, high_prices);
}

#[test]
fn featured_sort_is_stable() {
    let featured = sort(&initial_listings(), SortKey::Featured);
    let ids: Vec<u64> = featured.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 8, 11, 4, 5, 6, 7, 9, 10, 12]);
}
