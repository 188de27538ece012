//! Catalog layer: the listing store plus the pure filter and sort engines.
//!
//! # Modules
//!
//! - `backend`: [`ListingStore`] trait for add / replace / remove
//! - `memory`: process-lifetime `Vec` implementation
//! - `filter`: page profiles, search criteria and the filter predicate
//! - `sort`: stable orderings for result lists
//! - `seed`: built-in listings and seed-file loading

pub mod backend;
pub mod filter;
pub mod memory;
pub mod seed;
pub mod sort;

pub use backend::ListingStore;
pub use filter::{
    filter, matches, parse_minimum, BracketSet, FilterProfile, LocationScope, PriceBracket,
    SearchCriteria, TypeFilter,
};
pub use memory::MemoryCatalog;
pub use seed::{initial_listings, load_seed_file};
pub use sort::{sort, SortKey};
