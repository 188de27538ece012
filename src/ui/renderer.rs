//! Top-level rendering coordinator.
//!
//! Computes the view model from state and hands it to the components. The
//! result is returned as text; `main.rs` decides where it goes.
//!
//! # Example
//!
//! ```rust
//! use ceyland::app::AppState;
//! use ceyland::catalog::{initial_listings, MemoryCatalog};
//! use ceyland::ui::{render, Theme};
//!
//! let state = AppState::new(MemoryCatalog::from_seed(initial_listings()).unwrap());
//! let screen = render(&state, Theme::plain());
//! assert!(screen.contains("9 properties found"));
//! ```

use crate::app::{AppState, NoticeLevel, Notification};
use crate::ui::components;
use crate::ui::theme::{Role, Theme};
use crate::ui::viewmodel::UIViewModel;

/// Renders the current screen.
#[must_use]
pub fn render(state: &AppState, theme: Theme) -> String {
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, theme)
}

#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: Theme) -> String {
    let mut out = String::new();
    if let Err(err) = components::render_page(&mut out, vm, theme) {
        tracing::warn!(error = %err, "render failed");
    }
    out
}

/// One-line notification, timestamped.
#[must_use]
pub fn render_notification(notification: &Notification, theme: Theme) -> String {
    let (role, mark) = match notification.level {
        NoticeLevel::Success => (Role::Success, "ok"),
        NoticeLevel::Error => (Role::Error, "error"),
    };
    format!(
        "[{}] {} {}",
        notification.at.format("%H:%M:%S"),
        theme.paint(role, mark),
        notification.message
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::{Modal, Page};
    use crate::app::session::Session;
    use crate::catalog::{initial_listings, MemoryCatalog};

    fn state() -> AppState {
        AppState::new(MemoryCatalog::from_seed(initial_listings()).unwrap())
    }

    #[test]
    fn home_screen_lists_sale_cards() {
        let screen = render(&state(), Theme::plain());
        assert!(screen.contains("Ceyland Property"));
        assert!(screen.contains(">Home"));
        assert!(screen.contains("$1,250,000"));
        assert!(screen.contains("Villa · For Sale · Featured | 5 Beds · 4 Baths · 4,500 sqft"));
        assert!(!screen.contains("Cozy Downtown Apartment"));
        assert!(screen.contains("Login | Sign Up"));
    }

    #[test]
    fn rentals_screen_shows_monthly_prices_and_sort() {
        let mut state = state();
        state.navigate(Page::Rentals);
        let screen = render(&state, Theme::plain());
        assert!(screen.contains("$2,500/mo"));
        assert!(screen.contains("3 results"));
        assert!(screen.contains("Sort: Newest (newest, price-low, price-high, beds)"));
    }

    #[test]
    fn commercial_cards_omit_rooms() {
        let mut state = state();
        state.navigate(Page::Commercial);
        let screen = render(&state, Theme::plain());
        assert!(screen.contains("Commercial · For Sale | 15,000 sqft"));
    }

    #[test]
    fn post_ad_dialog_warns_anonymous_users() {
        let mut state = state();
        state.open_modal(Modal::PostAd);
        let screen = render(&state, Theme::plain());
        assert!(screen.contains("Notice: You need to be logged in"));
        assert!(screen.contains("[Login to Submit]"));
    }

    #[test]
    fn dashboard_highlights_quick_search() {
        let mut state = state();
        state.session = Session::Admin;
        state.admin_query = "Penthouse".to_string();
        let screen = render(&state, Theme::plain());
        assert!(screen.contains("Total Value: $12.0M"));
        assert!(screen.contains("Luxury [Penthouse]"));
        assert!(!screen.contains("Modern Luxury Villa"));
    }

    #[test]
    fn notifications_are_one_line() {
        let line = render_notification(&Notification::error("Invalid admin credentials!"), Theme::plain());
        assert!(line.ends_with("error Invalid admin credentials!"));
        assert!(!line.contains('\n'));
    }
}
