//! Catalog store abstraction.
//!
//! The [`ListingStore`] trait is the only way listings are created, replaced
//! or removed. It is deliberately small: each method maps to one user-facing
//! operation (admin add, public ad, admin edit, admin delete).

use crate::domain::{Listing, ListingDraft, ListingId, ListingPatch, Result};

/// An ordered collection of listings with unique ids.
///
/// Ids are allocated as `max(existing ids) + 1` (1 for an empty store), so
/// removing the current maximum lets the next insert reuse that id.
///
/// # Implementations
///
/// - [`MemoryCatalog`](super::MemoryCatalog): process-lifetime `Vec` (default)
pub trait ListingStore {
    /// All listings in display order.
    fn listings(&self) -> &[Listing];

    fn get(&self, id: ListingId) -> Option<&Listing>;

    /// Id the next inserted listing will receive.
    ///
    /// Stores never hold `ListingId::MAX`, so this cannot overflow.
    fn next_id(&self) -> ListingId {
        self.listings().iter().map(|l| l.id).max().unwrap_or(0) + 1
    }

    /// Inserts at the end (back-office add).
    fn append(&mut self, draft: ListingDraft) -> Listing;

    /// Inserts at the front (public ad submission).
    fn prepend(&mut self, draft: ListingDraft) -> Listing;

    /// Merges `patch` into the listing with this id and returns the new record.
    ///
    /// # Errors
    ///
    /// Returns [`CeylandError::NotFound`](crate::CeylandError::NotFound) if no
    /// listing has this id. The store is unchanged in that case.
    fn update(&mut self, id: ListingId, patch: &ListingPatch) -> Result<Listing>;

    /// Removes the listing with this id and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`CeylandError::NotFound`](crate::CeylandError::NotFound) if no
    /// listing has this id. The store is unchanged in that case.
    fn remove(&mut self, id: ListingId) -> Result<Listing>;
}
