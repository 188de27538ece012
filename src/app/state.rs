//! Application state management and view model computation.
//!
//! [`AppState`] is the single source of truth for everything the site shows:
//! the catalog, the session, the current page and overlay, every page's
//! search criteria, and the two listing forms.
//!
//! # Criteria ownership
//!
//! The home page's applied criteria are owned here at the root and survive
//! navigation. The home search form edits a separate draft that only takes
//! effect on `ApplySearch`. Every other page filters live on its own criteria,
//! which reset to defaults whenever that page is entered.
//!
//! # Example
//!
//! ```rust
//! use ceyland::app::AppState;
//! use ceyland::app::modes::Page;
//! use ceyland::catalog::{initial_listings, MemoryCatalog};
//!
//! let catalog = MemoryCatalog::from_seed(initial_listings()).unwrap();
//! let mut state = AppState::new(catalog);
//! state.navigate(Page::Rentals);
//! assert_eq!(state.visible_listings().len(), 3);
//! ```

use super::admin::{self, DashboardStats};
use super::modes::{AdminTab, AuthMode, Modal, Page};
use super::session::Session;
use crate::catalog::{
    filter, parse_minimum, sort, FilterProfile, ListingStore, LocationScope, MemoryCatalog, SearchCriteria, SortKey,
    TypeFilter,
};
use crate::domain::{format_thousands, AdForm, FieldErrors, Listing, ListingForm, Result};
use crate::ui::viewmodel::{
    AdminContent, AdminRow, AdminView, Body, EmptyState, FooterInfo, HeaderInfo, LabeledValue, ListingCard,
    ListingsView, MemberRow, ModalView, NavItem, SellView, SortInfo, StatTile, UIViewModel,
};

const NAV: [(&str, Page); 9] = [
    ("Home", Page::Home),
    ("Buy", Page::BuyProperty),
    ("Rent", Page::Rentals),
    ("Sell", Page::SellProperty),
    ("Houses", Page::Houses),
    ("Apartments", Page::Apartments),
    ("Villas", Page::Villas),
    ("Commercial", Page::Commercial),
    ("All Properties", Page::AllProperties),
];

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: MemoryCatalog,
    pub session: Session,
    pub page: Page,
    pub modal: Option<Modal>,

    /// Applied home criteria; root-owned, kept across navigation.
    pub home_criteria: SearchCriteria,
    /// Home search form values, committed by `ApplySearch`.
    pub hero_draft: SearchCriteria,
    /// Live criteria of the current non-home page.
    pub page_criteria: SearchCriteria,
    pub sort_key: Option<SortKey>,

    pub ad_form: AdForm,
    pub editor_form: ListingForm,
    /// Errors of the last rejected submission in the open dialog.
    pub form_errors: FieldErrors,

    pub admin_tab: AdminTab,
    pub admin_query: String,
}

impl AppState {
    #[must_use]
    pub fn new(catalog: MemoryCatalog) -> Self {
        Self {
            catalog,
            session: Session::default(),
            page: Page::Home,
            modal: None,
            home_criteria: SearchCriteria::default(),
            hero_draft: SearchCriteria::default(),
            page_criteria: SearchCriteria::default(),
            sort_key: None,
            ad_form: AdForm::default(),
            editor_form: ListingForm::default(),
            form_errors: FieldErrors::new(),
            admin_tab: AdminTab::default(),
            admin_query: String::new(),
        }
    }

    /// Switches page. Entering a page resets its local criteria and sort.
    ///
    /// Returns `false` when already on `page`.
    pub fn navigate(&mut self, page: Page) -> bool {
        if self.page == page {
            return false;
        }
        tracing::debug!(from = self.page.token(), to = page.token(), "navigating");
        self.page = page;
        self.page_criteria = SearchCriteria::default();
        self.hero_draft = SearchCriteria::default();
        self.sort_key = page.default_sort();
        true
    }

    /// Header category shortcut: set the home type filter, then go home.
    pub fn shortcut_type(&mut self, property_type: &str) {
        self.home_criteria.property_type = TypeFilter::parse(&property_type.to_lowercase());
        self.navigate(Page::Home);
    }

    #[must_use]
    pub fn profile(&self) -> Option<FilterProfile> {
        self.page.filter_profile()
    }

    /// Criteria the grid is filtered by.
    #[must_use]
    pub const fn active_criteria(&self) -> &SearchCriteria {
        match self.page {
            Page::Home => &self.home_criteria,
            _ => &self.page_criteria,
        }
    }

    /// Criteria the filter form edits.
    #[must_use]
    pub const fn form_criteria(&self) -> &SearchCriteria {
        match self.page {
            Page::Home => &self.hero_draft,
            _ => &self.page_criteria,
        }
    }

    fn form_criteria_mut(&mut self) -> &mut SearchCriteria {
        match self.page {
            Page::Home => &mut self.hero_draft,
            _ => &mut self.page_criteria,
        }
    }

    pub fn set_location(&mut self, text: &str) -> bool {
        if self.profile().is_none() {
            return false;
        }
        self.form_criteria_mut().location = text.to_string();
        true
    }

    /// Sets the user type filter. Ignored on pages with a pinned type.
    pub fn set_property_type(&mut self, token: &str) -> bool {
        if !self.profile().is_some_and(|p| p.user_type) {
            tracing::debug!(page = self.page.token(), "type filter not offered");
            return false;
        }
        self.form_criteria_mut().property_type = TypeFilter::parse(token);
        true
    }

    /// # Errors
    ///
    /// Returns [`CeylandError::UnknownBracket`](crate::domain::CeylandError::UnknownBracket)
    /// when the token is not one of the page's brackets.
    pub fn set_price(&mut self, token: &str) -> Result<bool> {
        let Some(profile) = self.profile() else {
            return Ok(false);
        };
        self.form_criteria_mut().price = profile.brackets.lookup(token)?;
        Ok(true)
    }

    /// # Errors
    ///
    /// Returns a validation error when the token is not a count.
    pub fn set_min_bedrooms(&mut self, token: &str) -> Result<bool> {
        if self.profile().is_none() {
            return Ok(false);
        }
        self.form_criteria_mut().min_bedrooms = parse_minimum("bedrooms", token)?;
        Ok(true)
    }

    /// Only the rentals page offers a bathrooms filter.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the token is not a count.
    pub fn set_min_bathrooms(&mut self, token: &str) -> Result<bool> {
        if !self.profile().is_some_and(|p| p.bathrooms) {
            tracing::debug!(page = self.page.token(), "bathrooms filter not offered");
            return Ok(false);
        }
        self.form_criteria_mut().min_bathrooms = parse_minimum("bathrooms", token)?;
        Ok(true)
    }

    /// Commits the home search form. No-op on other pages, which filter live.
    pub fn apply_search(&mut self) -> bool {
        if self.page != Page::Home {
            return false;
        }
        self.home_criteria = self.hero_draft.clone();
        tracing::debug!(criteria = ?self.home_criteria, "home search applied");
        true
    }

    pub fn clear_filters(&mut self) {
        match self.page {
            Page::Home => {
                self.home_criteria = SearchCriteria::default();
                self.hero_draft = SearchCriteria::default();
            }
            _ => self.page_criteria = SearchCriteria::default(),
        }
    }

    /// # Errors
    ///
    /// Returns [`CeylandError::UnknownSortKey`](crate::domain::CeylandError::UnknownSortKey)
    /// when the page does not offer the key.
    pub fn set_sort(&mut self, token: &str) -> Result<()> {
        let key = SortKey::parse(token)?;
        if !self.page.sort_keys().contains(&key) {
            return Err(crate::domain::CeylandError::UnknownSortKey(token.to_string()));
        }
        self.sort_key = Some(key);
        Ok(())
    }

    /// Filtered and ordered listings for the current page; empty without a grid.
    #[must_use]
    pub fn visible_listings(&self) -> Vec<Listing> {
        let Some(profile) = self.profile() else {
            return vec![];
        };
        let results = filter(self.catalog.listings(), self.active_criteria(), &profile);
        match self.sort_key {
            Some(key) => sort(&results, key),
            None => results,
        }
    }

    /// Opens a dialog, dropping errors left over from a previous one.
    pub fn open_modal(&mut self, modal: Modal) {
        tracing::debug!(?modal, "modal opened");
        self.form_errors = FieldErrors::new();
        self.modal = Some(modal);
    }

    pub fn close_modal(&mut self) {
        self.form_errors = FieldErrors::new();
        self.modal = None;
    }

    /// Clears back-office view state after entering or leaving the dashboard.
    pub fn reset_dashboard(&mut self) {
        self.admin_tab = AdminTab::default();
        self.admin_query.clear();
        self.editor_form = ListingForm::default();
    }

    /// Computes a renderable UI view model from current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let body = if self.session.is_admin() {
            Body::Admin(self.compute_admin_view())
        } else if let Some(profile) = self.profile() {
            Body::Listings(self.compute_listings_view(&profile))
        } else {
            Body::Sell(Self::compute_sell_view())
        };

        UIViewModel {
            header: self.compute_header(),
            body,
            modal: self.modal.map(|modal| self.compute_modal(modal)),
            footer: self.compute_footer(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let nav = if self.session.is_admin() {
            vec![]
        } else {
            NAV.iter()
                .map(|&(label, page)| NavItem {
                    label,
                    token: page.token(),
                    active: page == self.page,
                })
                .collect()
        };

        let account = match &self.session {
            Session::Anonymous => vec!["Login".to_string(), "Sign Up".to_string()],
            Session::User { name, email } => {
                vec!["Post Ad".to_string(), format!("{name} <{email}>"), "Logout".to_string()]
            }
            Session::Admin => vec!["Administrator".to_string(), "Logout".to_string()],
        };

        HeaderInfo {
            brand: if self.session.is_admin() {
                "Ceyland Property Admin".to_string()
            } else {
                "Ceyland Property".to_string()
            },
            nav,
            account,
        }
    }

    fn compute_listings_view(&self, profile: &FilterProfile) -> ListingsView {
        let listings = self.visible_listings();
        let criteria = self.form_criteria();

        let mut filters = vec![LabeledValue {
            label: match profile.location_scope {
                LocationScope::Location => "Location",
                LocationScope::LocationOrTitle => "Search",
            },
            value: criteria.location.clone(),
        }];
        if profile.user_type {
            filters.push(LabeledValue {
                label: "Type",
                value: match &criteria.property_type {
                    TypeFilter::All => "All Types".to_string(),
                    TypeFilter::Only(kind) => kind.clone(),
                },
            });
        }
        filters.push(LabeledValue {
            label: "Price",
            value: criteria.price.map_or_else(|| "Any Price".to_string(), |b| b.label.to_string()),
        });
        filters.push(LabeledValue {
            label: "Bedrooms",
            value: minimum_label(criteria.min_bedrooms),
        });
        if profile.bathrooms {
            filters.push(LabeledValue {
                label: "Bathrooms",
                value: minimum_label(criteria.min_bathrooms),
            });
        }

        let sort = self.sort_key.map(|selected| SortInfo {
            selected: selected.label(),
            options: self.page.sort_keys().iter().map(|k| k.token()).collect(),
        });

        let empty_state = listings.is_empty().then(|| EmptyState {
            message: match self.page {
                Page::Rentals => "No rental properties found matching your criteria.",
                Page::BuyProperty => "No Properties Found",
                _ => "No properties found matching your criteria.",
            }
            .to_string(),
            subtitle: "Try adjusting your filters or clear them to see everything.".to_string(),
        });

        ListingsView {
            title: self.page.title().to_string(),
            filters,
            sort,
            count: self.page.count_label(listings.len()),
            cards: listings.iter().map(listing_card).collect(),
            empty_state,
        }
    }

    fn compute_sell_view() -> SellView {
        SellView {
            title: Page::SellProperty.title().to_string(),
            steps: vec![
                "Create Your Listing".to_string(),
                "Connect With Buyers".to_string(),
                "Close the Deal".to_string(),
            ],
            call_to_action: "Ready to Sell Your Property? Post an ad to get started.".to_string(),
        }
    }

    fn compute_admin_view(&self) -> AdminView {
        let stats = DashboardStats::collect(&self.catalog);
        let tiles = vec![
            StatTile {
                label: "Total Properties",
                value: stats.total_properties.to_string(),
            },
            StatTile {
                label: "Total Users",
                value: stats.total_users.to_string(),
            },
            StatTile {
                label: "Featured Properties",
                value: stats.featured_properties.to_string(),
            },
            StatTile {
                label: "Total Value",
                value: stats.total_value_label(),
            },
        ];

        let content = match self.admin_tab {
            AdminTab::Properties => AdminContent::Properties {
                query: self.admin_query.clone(),
                rows: admin::quick_search(&self.catalog, &self.admin_query)
                    .into_iter()
                    .map(|listing| AdminRow {
                        id: listing.id,
                        title: listing.title.clone(),
                        location: listing.location.clone(),
                        property_type: listing.property_type.clone(),
                        price: listing.price_label(),
                        listing_type: listing.listing_type.label(),
                        featured: listing.featured,
                        highlight_ranges: admin::highlight_ranges(&listing.title, &self.admin_query),
                    })
                    .collect(),
            },
            AdminTab::Users => AdminContent::Users(
                admin::members()
                    .into_iter()
                    .map(|m| MemberRow {
                        name: m.name.to_string(),
                        email: m.email.to_string(),
                        phone: m.phone.to_string(),
                        joined: m.joined.format("%Y-%m-%d").to_string(),
                    })
                    .collect(),
            ),
            AdminTab::Settings => AdminContent::Settings(admin::SITE_SETTINGS.to_vec()),
        };

        AdminView {
            tab: self.admin_tab,
            stats: tiles,
            content,
        }
    }

    fn compute_modal(&self, modal: Modal) -> ModalView {
        let errors = self.form_errors.iter().map(|(_, message)| message.to_string()).collect();
        match modal {
            Modal::Auth(AuthMode::Login) => ModalView {
                title: "Welcome Back".to_string(),
                notice: None,
                fields: labeled(&[("Email", ""), ("Password", "")]),
                errors,
                submit_label: "Login".to_string(),
            },
            Modal::Auth(AuthMode::Register) => ModalView {
                title: "Create Account".to_string(),
                notice: None,
                fields: labeled(&[("Full Name", ""), ("Email", ""), ("Phone", ""), ("Password", "")]),
                errors,
                submit_label: "Sign Up".to_string(),
            },
            Modal::AdminLogin => ModalView {
                title: "Admin Login".to_string(),
                notice: None,
                fields: labeled(&[("Email", ""), ("Password", "")]),
                errors,
                submit_label: "Login as Administrator".to_string(),
            },
            Modal::PostAd => {
                let form = &self.ad_form;
                let signed_in = self.session.is_user();
                ModalView {
                    title: "Post Your Property Ad".to_string(),
                    notice: (!signed_in).then(|| {
                        "You need to be logged in to post a property ad. Submit to login or create an account."
                            .to_string()
                    }),
                    fields: labeled(&[
                        ("Title", &form.title),
                        ("Price", &form.price),
                        ("Location", &form.location),
                        ("Bedrooms", &form.bedrooms),
                        ("Bathrooms", &form.bathrooms),
                        ("Area (sqft)", &form.area),
                        ("Type", &form.property_type),
                        ("Listing Type", &form.listing_type),
                        ("Description", &form.description),
                        ("Image URL", &form.image),
                        ("Contact Name", &form.contact_name),
                        ("Contact Email", &form.contact_email),
                        ("Contact Phone", &form.contact_phone),
                    ]),
                    errors,
                    submit_label: if signed_in { "Submit Property" } else { "Login to Submit" }.to_string(),
                }
            }
            Modal::ListingEditor(target) => {
                let form = &self.editor_form;
                let featured = if form.featured { "yes" } else { "no" };
                ModalView {
                    title: target.map_or_else(|| "Add New Property".to_string(), |id| format!("Edit Property #{id}")),
                    notice: None,
                    fields: labeled(&[
                        ("Title", &form.title),
                        ("Price", &form.price),
                        ("Location", &form.location),
                        ("Bedrooms", &form.bedrooms),
                        ("Bathrooms", &form.bathrooms),
                        ("Area (sqft)", &form.area),
                        ("Image URL", &form.image),
                        ("Type", &form.property_type),
                        ("Listing Type", &form.listing_type),
                        ("Featured", featured),
                    ]),
                    errors,
                    submit_label: if target.is_some() { "Update Property" } else { "Add Property" }.to_string(),
                }
            }
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let hints = if self.modal.is_some() {
            "close: dismiss dialog  help: commands  quit: exit"
        } else if self.session.is_admin() {
            "tab <name>  find <text>  new  edit <id>  delete <id>  logout  quit"
        } else {
            "go <page>  type <kind>  where <text>  price <range>  beds <n>  sort <key>  help  quit"
        };
        FooterInfo {
            hints: hints.to_string(),
        }
    }
}

fn labeled(pairs: &[(&'static str, &str)]) -> Vec<LabeledValue> {
    pairs
        .iter()
        .map(|&(label, value)| LabeledValue {
            label,
            value: value.to_string(),
        })
        .collect()
}

fn minimum_label(minimum: Option<u32>) -> String {
    minimum.map_or_else(|| "Any".to_string(), |n| format!("{n}+"))
}

fn listing_card(listing: &Listing) -> ListingCard {
    let mut badges = vec![listing.property_type.clone(), listing.listing_type.label().to_string()];
    if listing.featured {
        badges.push("Featured".to_string());
    }

    let mut facts = Vec::with_capacity(3);
    if listing.bedrooms > 0 {
        facts.push(format!("{} Beds", listing.bedrooms));
    }
    if listing.bathrooms > 0 {
        facts.push(format!("{} Baths", listing.bathrooms));
    }
    facts.push(format!("{} sqft", format_thousands(u64::from(listing.area))));

    ListingCard {
        id: listing.id,
        title: listing.title.clone(),
        location: listing.location.clone(),
        price: listing.price_label(),
        badges,
        facts,
    }
}
