//! In-memory catalog store.
//!
//! Listings live in a `Vec` for the lifetime of the process. Nothing is
//! written anywhere; a restart starts again from the seed.

use std::collections::HashSet;

use crate::catalog::backend::ListingStore;
use crate::domain::{CeylandError, Listing, ListingDraft, ListingId, ListingPatch, Result};

/// `Vec`-backed [`ListingStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryCatalog {
    listings: Vec<Listing>,
}

impl MemoryCatalog {
    /// Builds a catalog from seed listings, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`CeylandError::Seed`] if two seed listings share an id or an
    /// id is zero or `ListingId::MAX` (no id would be left for new listings).
    pub fn from_seed(listings: Vec<Listing>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(listings.len());
        for listing in &listings {
            if listing.id == 0 {
                return Err(CeylandError::Seed(format!("listing '{}' has id 0", listing.title)));
            }
            if listing.id == ListingId::MAX {
                return Err(CeylandError::Seed(format!(
                    "listing '{}' has id {}, leaving no id for new listings",
                    listing.title,
                    ListingId::MAX
                )));
            }
            if !seen.insert(listing.id) {
                return Err(CeylandError::Seed(format!("duplicate listing id {}", listing.id)));
            }
        }

        tracing::debug!(count = listings.len(), "catalog seeded");
        Ok(Self { listings })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    #[must_use]
    pub fn featured_count(&self) -> usize {
        self.listings.iter().filter(|l| l.featured).count()
    }

    /// Sum of all listing prices, sale and rent alike. Saturates at `u64::MAX`.
    #[must_use]
    pub fn total_value(&self) -> u64 {
        self.listings.iter().map(|l| l.price).fold(0, u64::saturating_add)
    }

    fn position(&self, id: ListingId) -> Result<usize> {
        self.listings
            .iter()
            .position(|l| l.id == id)
            .ok_or(CeylandError::NotFound(id))
    }
}

impl ListingStore for MemoryCatalog {
    fn listings(&self) -> &[Listing] {
        &self.listings
    }

    fn get(&self, id: ListingId) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    fn append(&mut self, draft: ListingDraft) -> Listing {
        let listing = Listing::from_draft(self.next_id(), draft);
        tracing::debug!(listing_id = listing.id, title = %listing.title, "listing appended");
        self.listings.push(listing.clone());
        listing
    }

    fn prepend(&mut self, draft: ListingDraft) -> Listing {
        let listing = Listing::from_draft(self.next_id(), draft);
        tracing::debug!(listing_id = listing.id, title = %listing.title, "listing prepended");
        self.listings.insert(0, listing.clone());
        listing
    }

    fn update(&mut self, id: ListingId, patch: &ListingPatch) -> Result<Listing> {
        let index = self.position(id)?;
        let listing = &mut self.listings[index];
        patch.apply_to(listing);
        tracing::debug!(listing_id = id, "listing updated");
        Ok(listing.clone())
    }

    fn remove(&mut self, id: ListingId) -> Result<Listing> {
        let index = self.position(id)?;
        let removed = self.listings.remove(index);
        tracing::debug!(listing_id = id, "listing removed");
        Ok(removed)
    }
}
