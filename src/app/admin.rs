//! Back-office dashboard data: stats, the mock member list and site settings.

use chrono::NaiveDate;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::catalog::{ListingStore, MemoryCatalog};
use crate::domain::Listing;

/// A registered member shown on the Users tab. The list is fixed mock data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: u32,
    pub name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub joined: NaiveDate,
}

const MEMBERS: [(u32, &str, &str, &str, (i32, u32, u32)); 3] = [
    (1, "John Doe", "john@example.com", "+1 234 567 890", (2024, 1, 15)),
    (2, "Jane Smith", "jane@example.com", "+1 234 567 891", (2024, 2, 20)),
    (3, "Bob Johnson", "bob@example.com", "+1 234 567 892", (2024, 3, 10)),
];

#[must_use]
pub fn members() -> Vec<Member> {
    MEMBERS
        .iter()
        .filter_map(|&(id, name, email, phone, (y, m, d))| {
            NaiveDate::from_ymd_opt(y, m, d).map(|joined| Member {
                id,
                name,
                email,
                phone,
                joined,
            })
        })
        .collect()
}

/// Read-only site settings shown on the Settings tab.
pub const SITE_SETTINGS: [(&str, &str); 3] = [
    ("Company Name", "Ceyland Property"),
    ("Contact Email", "info@ceylandproperty.com"),
    ("Contact Phone", "+1 (234) 567-890"),
];

/// Headline numbers at the top of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_properties: usize,
    pub total_users: usize,
    pub featured_properties: usize,
    pub total_value: u64,
}

impl DashboardStats {
    #[must_use]
    pub fn collect(catalog: &MemoryCatalog) -> Self {
        Self {
            total_properties: catalog.len(),
            total_users: MEMBERS.len(),
            featured_properties: catalog.featured_count(),
            total_value: catalog.total_value(),
        }
    }

    /// Total value in millions with one decimal, e.g. `$12.0M`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total_value_label(&self) -> String {
        format!("${:.1}M", self.total_value as f64 / 1_000_000.0)
    }
}

/// Listings whose title or location fuzzy-matches every whitespace token of
/// `query`. Store order is kept; an empty query returns everything.
#[must_use]
pub fn quick_search<'a>(catalog: &'a MemoryCatalog, query: &str) -> Vec<&'a Listing> {
    let _span = tracing::debug_span!("quick_search", total = catalog.len(), query_len = query.len()).entered();

    let tokens: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
    if tokens.is_empty() {
        return catalog.listings().iter().collect();
    }

    let matcher = SkimMatcherV2::default();
    let rows: Vec<&Listing> = catalog
        .listings()
        .iter()
        .filter(|listing| {
            let haystack = format!("{} {}", listing.title, listing.location).to_lowercase();
            tokens.iter().all(|token| matcher.fuzzy_match(&haystack, token).is_some())
        })
        .collect();

    tracing::debug!(matched = rows.len(), "quick search applied");
    rows
}

/// Byte ranges of `text` matched by `query`, coalesced into contiguous runs.
#[must_use]
pub fn highlight_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let query = query.trim();
    if query.is_empty() {
        return vec![];
    }

    let matcher = SkimMatcherV2::default();
    let Some((_score, indices)) = matcher.fuzzy_indices(text, query) else {
        return vec![];
    };

    // fuzzy_indices reports char positions
    let offsets: Vec<(usize, usize)> = text.char_indices().map(|(at, c)| (at, at + c.len_utf8())).collect();

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    for idx in indices {
        let Some(&(start, end)) = offsets.get(idx) else {
            continue;
        };
        match ranges.last_mut() {
            Some(last) if last.1 == start => last.1 = end,
            _ => ranges.push((start, end)),
        }
    }
    ranges
}
