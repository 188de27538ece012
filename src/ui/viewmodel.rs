//! View model types representing renderable UI state.
//!
//! View models are created by `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready text.
//!
//! # Example
//!
//! ```rust
//! use ceyland::ui::viewmodel::{Body, FooterInfo, HeaderInfo, UIViewModel};
//! use ceyland::ui::viewmodel::{SellView};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { brand: "Ceyland Property".to_string(), nav: vec![], account: vec![] },
//!     body: Body::Sell(SellView { title: "Sell Your Property".to_string(), steps: vec![], call_to_action: String::new() }),
//!     modal: None,
//!     footer: FooterInfo { hints: "q: quit".to_string() },
//! };
//! assert!(vm.modal.is_none());
//! ```

use crate::app::modes::AdminTab;
use crate::domain::ListingId;

/// Complete UI view model for rendering.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub body: Body,
    /// Open dialog, drawn after the body.
    pub modal: Option<ModalView>,
    pub footer: FooterInfo,
}

/// Brand line, navigation and account controls.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub brand: String,
    /// Empty on the admin surface.
    pub nav: Vec<NavItem>,
    /// Account controls, e.g. `Login`, `Sign Up` or the signed-in name.
    pub account: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct NavItem {
    pub label: &'static str,
    pub token: &'static str,
    pub active: bool,
}

/// Main content area.
#[derive(Debug, Clone)]
pub enum Body {
    Listings(ListingsView),
    Sell(SellView),
    Admin(AdminView),
}

/// A filterable grid page.
#[derive(Debug, Clone)]
pub struct ListingsView {
    pub title: String,
    /// Current filter values, in form order.
    pub filters: Vec<LabeledValue>,
    pub sort: Option<SortInfo>,
    pub count: String,
    pub cards: Vec<ListingCard>,
    pub empty_state: Option<EmptyState>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledValue {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortInfo {
    pub selected: &'static str,
    pub options: Vec<&'static str>,
}

/// One property card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingCard {
    pub id: ListingId,
    pub title: String,
    pub location: String,
    /// Formatted price, e.g. `$1,250,000` or `$2,500/mo`.
    pub price: String,
    /// Type and listing-type badges, plus `Featured` when set.
    pub badges: Vec<String>,
    /// Beds, baths and area; zero counts are omitted.
    pub facts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

#[derive(Debug, Clone)]
pub struct SellView {
    pub title: String,
    pub steps: Vec<String>,
    pub call_to_action: String,
}

/// Back-office dashboard.
#[derive(Debug, Clone)]
pub struct AdminView {
    pub tab: AdminTab,
    pub stats: Vec<StatTile>,
    pub content: AdminContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTile {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone)]
pub enum AdminContent {
    Properties { query: String, rows: Vec<AdminRow> },
    Users(Vec<MemberRow>),
    Settings(Vec<(&'static str, &'static str)>),
}

/// One row of the admin property table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminRow {
    pub id: ListingId,
    pub title: String,
    pub location: String,
    pub property_type: String,
    pub price: String,
    pub listing_type: &'static str,
    pub featured: bool,
    /// Byte ranges of `title` matched by the quick search.
    pub highlight_ranges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberRow {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub joined: String,
}

/// An open dialog with its current field values and validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalView {
    pub title: String,
    pub notice: Option<String>,
    pub fields: Vec<LabeledValue>,
    pub errors: Vec<String>,
    pub submit_label: String,
}

#[derive(Debug, Clone)]
pub struct FooterInfo {
    pub hints: String,
}
