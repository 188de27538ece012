//! Catalog seed data.
//!
//! The catalog starts from the built-in listings below unless a seed file is
//! configured. A seed file is a JSON array of listings using the same field
//! names as [`Listing`]'s serde representation.

use std::path::Path;

use crate::domain::{CeylandError, Listing, ListingType, Result};

#[allow(clippy::too_many_arguments)]
fn listing(
    id: u64,
    title: &str,
    price: u64,
    location: &str,
    (bedrooms, bathrooms, area): (u32, u32, u32),
    image: &str,
    property_type: &str,
    featured: bool,
    listing_type: ListingType,
) -> Listing {
    Listing {
        id,
        title: title.to_string(),
        price,
        location: location.to_string(),
        bedrooms,
        bathrooms,
        area,
        image: image.to_string(),
        property_type: property_type.to_string(),
        featured,
        listing_type,
    }
}

/// The twelve listings the site opens with: nine for sale, three for rent.
#[must_use]
pub fn initial_listings() -> Vec<Listing> {
    use ListingType::{Rent, Sale};

    vec![
        listing(1, "Modern Luxury Villa", 1_250_000, "Beverly Hills, CA", (5, 4, 4500),
            "https://images.unsplash.com/photo-1706808849802-8f876ade0d1f?w=1080", "Villa", true, Sale),
        listing(2, "Downtown Apartment", 450_000, "Manhattan, NY", (2, 2, 1200),
            "https://images.unsplash.com/photo-1515263487990-61b07816b324?w=1080", "Apartment", true, Sale),
        listing(3, "Beachfront Villa with Pool", 2_100_000, "Malibu, CA", (6, 5, 5800),
            "https://images.unsplash.com/photo-1694967832949-09984640b143?w=1080", "Villa", true, Sale),
        listing(4, "Contemporary Townhouse", 650_000, "San Francisco, CA", (3, 3, 2200),
            "https://images.unsplash.com/photo-1624343385944-b99336163b50?w=1080", "House", false, Sale),
        listing(5, "Luxury Penthouse", 1_850_000, "Miami, FL", (4, 4, 3800),
            "https://images.unsplash.com/photo-1568115286680-d203e08a8be6?w=1080", "Apartment", false, Sale),
        listing(6, "Ocean View Estate", 3_200_000, "Laguna Beach, CA", (7, 6, 6500),
            "https://images.unsplash.com/photo-1678788762802-0c6c6cdd89fe?w=1080", "Villa", false, Sale),
        listing(7, "Cozy Downtown Apartment", 2500, "Seattle, WA", (2, 1, 950),
            "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00?w=800&q=80", "Apartment", false, Rent),
        listing(8, "Luxury Beachfront Condo", 4200, "Miami Beach, FL", (3, 2, 1800),
            "https://images.unsplash.com/photo-1512917774080-9991f1c4c750?w=800&q=80", "Apartment", true, Rent),
        listing(9, "Modern Family Home", 3800, "Austin, TX", (4, 3, 2600),
            "https://images.unsplash.com/photo-1568605114967-8130f3a36994?w=800&q=80", "House", false, Rent),
        listing(10, "Spacious Commercial Land", 850_000, "Dallas, TX", (0, 0, 15_000),
            "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?w=800&q=80", "Commercial", false, Sale),
        listing(11, "Prime Commercial Plot", 1_200_000, "Houston, TX", (0, 0, 20_000),
            "https://images.unsplash.com/photo-1497366216548-37526070297c?w=800&q=80", "Commercial", true, Sale),
        listing(12, "Suburban Family House", 480_000, "Portland, OR", (4, 2, 2400),
            "https://images.unsplash.com/photo-1583608205776-bfd35f0d9f83?w=800&q=80", "House", false, Sale),
    ]
}

/// Reads a seed catalog from a JSON file.
///
/// # Errors
///
/// Returns [`CeylandError::Io`] if the file cannot be read and
/// [`CeylandError::Seed`] if it is not a JSON array of listings.
pub fn load_seed_file(path: &Path) -> Result<Vec<Listing>> {
    let _span = tracing::debug_span!("load_seed_file", path = ?path).entered();

    let contents = std::fs::read_to_string(path)?;
    let listings: Vec<Listing> = serde_json::from_str(&contents)
        .map_err(|e| CeylandError::Seed(format!("failed to parse {}: {e}", path.display())))?;

    tracing::debug!(count = listings.len(), "seed file loaded");
    Ok(listings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_seed_has_unique_sequential_ids() {
        let listings = initial_listings();
        let ids: Vec<u64> = listings.iter().map(|l| l.id).collect();
        assert_eq!(ids, (1..=12).collect::<Vec<_>>());
        assert_eq!(listings.iter().filter(|l| l.listing_type == ListingType::Rent).count(), 3);
    }

    #[test]
    fn seed_file_uses_site_field_names() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": 3, "title": "Lake House", "price": 300000, "location": "Nuwara Eliya",
                 "bedrooms": 3, "bathrooms": 2, "area": 1800, "image": "",
                 "type": "House", "listingType": "sale"}}]"#
        )
        .unwrap();

        let listings = load_seed_file(file.path()).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].property_type, "House");
        assert!(!listings[0].featured);
    }

    #[test]
    fn malformed_seed_file_is_a_seed_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"listings": []}}"#).unwrap();
        assert!(matches!(load_seed_file(file.path()), Err(CeylandError::Seed(_))));
    }

    #[test]
    fn missing_seed_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(load_seed_file(&missing), Err(CeylandError::Io(_))));
    }
}
