//! Event handling and state transition logic.
//!
//! [`handle_event`] is the single entry point for every user action. It
//! pattern-matches the event, mutates [`AppState`], and returns whether the
//! view changed plus the side effects the runtime must execute.
//!
//! # Event Types
//!
//! - **Navigation**: `Navigate`, `ShortcutType`
//! - **Filtering**: `SetLocation`, `SetPropertyType`, `SetPrice`,
//!   `SetMinBedrooms`, `SetMinBathrooms`, `ApplySearch`, `ClearFilters`, `SetSort`
//! - **Dialogs**: `OpenAuth`, `OpenAdminLogin`, `OpenPostAd`, `CloseModal`
//! - **Session**: `Login`, `Register`, `Logout`, `AdminLogin`
//! - **Posting**: `SetAdField`, `SubmitAd`
//! - **Back-office**: `SelectAdminTab`, `AdminSearch`, `OpenEditor`,
//!   `SetEditorField`, `SaveListing`, `DeleteListing`
//!
//! Public-site events are ignored while the admin dashboard is showing.
//! Back-office events without an admin session fail with
//! [`CeylandError::AdminRequired`].
//!
//! # Example
//!
//! ```rust
//! use ceyland::app::{handle_event, AppState, Event};
//! use ceyland::app::modes::Page;
//! use ceyland::catalog::{initial_listings, MemoryCatalog};
//!
//! let mut state = AppState::new(MemoryCatalog::from_seed(initial_listings())?);
//! let (render, actions) = handle_event(&mut state, &Event::Navigate(Page::Rentals))?;
//! assert!(render);
//! assert!(actions.is_empty());
//! # Ok::<(), ceyland::domain::CeylandError>(())
//! ```

use crate::app::actions::Notification;
use crate::app::modes::{AdminTab, AuthMode, Modal, Page};
use crate::app::{Action, AppState};
use crate::catalog::ListingStore;
use crate::domain::{AdForm, CeylandError, ListingForm, ListingId, RegistrationForm, Result};

/// Discrete user actions, in the order the site offers them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Switches to a page; entering a page resets its local filters.
    Navigate(Page),
    /// Header category shortcut. Sets the home type filter and lands on home.
    ShortcutType(String),

    SetLocation(String),
    SetPropertyType(String),
    /// Price bracket token, e.g. `500000-1000000` or `all`.
    SetPrice(String),
    SetMinBedrooms(String),
    SetMinBathrooms(String),
    /// Commits the home search form.
    ApplySearch,
    ClearFilters,
    SetSort(String),

    OpenAuth(AuthMode),
    OpenAdminLogin,
    OpenPostAd,
    CloseModal,

    Login {
        email: String,
        password: String,
    },
    Register(RegistrationForm),
    /// Ends a user or admin session.
    Logout,
    AdminLogin {
        email: String,
        password: String,
    },

    SetAdField {
        field: String,
        value: String,
    },
    SubmitAd,

    SelectAdminTab(AdminTab),
    /// Replaces the dashboard quick-search query.
    AdminSearch(String),
    /// Opens the listing editor; `None` adds a new listing.
    OpenEditor(Option<ListingId>),
    SetEditorField {
        field: String,
        value: String,
    },
    SaveListing,
    DeleteListing(ListingId),

    Quit,
}

impl Event {
    const fn is_public(&self) -> bool {
        matches!(
            self,
            Self::Navigate(_)
                | Self::ShortcutType(_)
                | Self::SetLocation(_)
                | Self::SetPropertyType(_)
                | Self::SetPrice(_)
                | Self::SetMinBedrooms(_)
                | Self::SetMinBathrooms(_)
                | Self::ApplySearch
                | Self::ClearFilters
                | Self::SetSort(_)
                | Self::OpenAuth(_)
                | Self::OpenPostAd
                | Self::Login { .. }
                | Self::Register(_)
                | Self::SetAdField { .. }
                | Self::SubmitAd
        )
    }

    const fn is_back_office(&self) -> bool {
        matches!(
            self,
            Self::SelectAdminTab(_)
                | Self::AdminSearch(_)
                | Self::OpenEditor(_)
                | Self::SetEditorField { .. }
                | Self::SaveListing
                | Self::DeleteListing(_)
        )
    }
}

const POSTED: &str = "Your property has been posted successfully! It will be visible once approved by admin.";
const NOT_FOUND: &str = "Property not found!";

fn notify(message: &str) -> Vec<Action> {
    vec![Action::Notify(Notification::success(message))]
}

fn notify_error(message: &str) -> Vec<Action> {
    vec![Action::Notify(Notification::error(message))]
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`.
///
/// # Errors
///
/// Returns input errors (unknown bracket, sort key or count) and
/// [`CeylandError::AdminRequired`] for back-office events outside an admin
/// session. State is left unchanged in every error case. Failures the user
/// is meant to see, such as bad credentials or a rejected form, are reported
/// through notifications or form errors instead.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    if state.session.is_admin() && event.is_public() {
        tracing::debug!("public event ignored on admin surface");
        return Ok((false, vec![]));
    }
    if event.is_back_office() && !state.session.is_admin() {
        tracing::warn!("back-office event without admin session");
        return Err(CeylandError::AdminRequired);
    }

    match event {
        Event::Navigate(page) => Ok((state.navigate(*page), vec![])),
        Event::ShortcutType(kind) => {
            state.shortcut_type(kind);
            Ok((true, vec![]))
        }
        Event::SetLocation(text) => Ok((state.set_location(text), vec![])),
        Event::SetPropertyType(kind) => Ok((state.set_property_type(kind), vec![])),
        Event::SetPrice(token) => Ok((state.set_price(token)?, vec![])),
        Event::SetMinBedrooms(token) => Ok((state.set_min_bedrooms(token)?, vec![])),
        Event::SetMinBathrooms(token) => Ok((state.set_min_bathrooms(token)?, vec![])),
        Event::ApplySearch => Ok((state.apply_search(), vec![])),
        Event::ClearFilters => {
            state.clear_filters();
            Ok((true, vec![]))
        }
        Event::SetSort(token) => {
            state.set_sort(token)?;
            Ok((true, vec![]))
        }

        Event::OpenAuth(mode) => {
            state.open_modal(Modal::Auth(*mode));
            Ok((true, vec![]))
        }
        Event::OpenAdminLogin => {
            state.open_modal(Modal::AdminLogin);
            Ok((true, vec![]))
        }
        Event::OpenPostAd => {
            state.open_modal(Modal::PostAd);
            Ok((true, vec![]))
        }
        Event::CloseModal => {
            if state.modal.is_none() {
                return Ok((false, vec![]));
            }
            state.close_modal();
            Ok((true, vec![]))
        }

        Event::Login { email, password } => {
            let message = state.session.login(email, password);
            state.close_modal();
            Ok((true, notify(message)))
        }
        Event::Register(form) => match state.session.register(form) {
            Ok(message) => {
                state.close_modal();
                Ok((true, notify(message)))
            }
            Err(CeylandError::Validation(errors)) => {
                tracing::debug!(errors = %errors, "registration rejected");
                state.form_errors = errors;
                Ok((true, vec![]))
            }
            Err(err) => Err(err),
        },
        Event::Logout => {
            let was_admin = state.session.is_admin();
            let Some(message) = state.session.logout() else {
                return Ok((false, vec![]));
            };
            if was_admin {
                state.reset_dashboard();
            }
            state.close_modal();
            Ok((true, notify(message)))
        }
        Event::AdminLogin { email, password } => match state.session.admin_login(email, password) {
            Ok(message) => {
                state.close_modal();
                state.reset_dashboard();
                Ok((true, notify(message)))
            }
            Err(CeylandError::InvalidCredentials) => Ok((false, notify_error("Invalid admin credentials!"))),
            Err(err) => Err(err),
        },

        Event::SetAdField { field, value } => {
            if !state.ad_form.set(field, value.as_str()) {
                tracing::debug!(field = %field, "unknown ad form field");
                return Ok((false, vec![]));
            }
            Ok((state.modal == Some(Modal::PostAd), vec![]))
        }
        Event::SubmitAd => {
            if state.modal != Some(Modal::PostAd) {
                tracing::debug!("submit without open post-ad dialog");
                return Ok((false, vec![]));
            }
            if !state.session.is_user() {
                tracing::debug!("ad submission requires login");
                state.ad_form = AdForm::default();
                state.open_modal(Modal::Auth(AuthMode::Login));
                return Ok((true, vec![]));
            }
            match state.ad_form.validate() {
                Ok(submission) => {
                    let listing = state.catalog.prepend(submission.draft);
                    tracing::info!(listing_id = listing.id, "ad posted");
                    state.ad_form = AdForm::default();
                    state.close_modal();
                    Ok((true, notify(POSTED)))
                }
                Err(CeylandError::Validation(errors)) => {
                    tracing::debug!(errors = %errors, "ad rejected");
                    state.form_errors = errors;
                    Ok((true, vec![]))
                }
                Err(err) => Err(err),
            }
        }

        Event::SelectAdminTab(tab) => {
            state.admin_tab = *tab;
            Ok((true, vec![]))
        }
        Event::AdminSearch(query) => {
            state.admin_query.clone_from(query);
            Ok((true, vec![]))
        }
        Event::OpenEditor(target) => {
            let form = match target {
                None => ListingForm::default(),
                Some(id) => match state.catalog.get(*id) {
                    Some(listing) => ListingForm::from_listing(listing),
                    None => return Ok((false, notify_error(NOT_FOUND))),
                },
            };
            state.editor_form = form;
            state.open_modal(Modal::ListingEditor(*target));
            Ok((true, vec![]))
        }
        Event::SetEditorField { field, value } => {
            if !state.editor_form.set(field, value.as_str()) {
                tracing::debug!(field = %field, "unknown editor field");
                return Ok((false, vec![]));
            }
            Ok((matches!(state.modal, Some(Modal::ListingEditor(_))), vec![]))
        }
        Event::SaveListing => {
            let Some(Modal::ListingEditor(target)) = state.modal else {
                tracing::debug!("save without open editor");
                return Ok((false, vec![]));
            };
            let saved = match target {
                None => state.editor_form.validate().map(|draft| {
                    let listing = state.catalog.append(draft);
                    tracing::info!(listing_id = listing.id, "listing added");
                    "Property added successfully!"
                }),
                Some(id) => state
                    .editor_form
                    .to_patch()
                    .and_then(|patch| state.catalog.update(id, &patch))
                    .map(|_| "Property updated successfully!"),
            };
            match saved {
                Ok(message) => {
                    state.close_modal();
                    state.editor_form = ListingForm::default();
                    Ok((true, notify(message)))
                }
                Err(CeylandError::Validation(errors)) => {
                    tracing::debug!(errors = %errors, "listing rejected");
                    state.form_errors = errors;
                    Ok((true, vec![]))
                }
                Err(CeylandError::NotFound(id)) => {
                    tracing::warn!(listing_id = id, "edited listing no longer exists");
                    state.close_modal();
                    Ok((true, notify_error(NOT_FOUND)))
                }
                Err(err) => Err(err),
            }
        }
        Event::DeleteListing(id) => match state.catalog.remove(*id) {
            Ok(listing) => {
                tracing::info!(listing_id = listing.id, "listing deleted");
                Ok((true, notify("Property deleted successfully!")))
            }
            Err(CeylandError::NotFound(_)) => Ok((false, notify_error(NOT_FOUND))),
            Err(err) => Err(err),
        },

        Event::Quit => Ok((false, vec![Action::Quit])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::NoticeLevel;
    use crate::app::session::{Session, ADMIN_EMAIL, ADMIN_PASSWORD};
    use crate::catalog::{initial_listings, MemoryCatalog};

    fn state() -> AppState {
        AppState::new(MemoryCatalog::from_seed(initial_listings()).unwrap())
    }

    fn messages(actions: &[Action]) -> Vec<(NoticeLevel, String)> {
        actions
            .iter()
            .filter_map(Action::notification)
            .map(|n| (n.level, n.message.clone()))
            .collect()
    }

    fn admin() -> AppState {
        let mut state = state();
        handle_event(
            &mut state,
            &Event::AdminLogin {
                email: ADMIN_EMAIL.to_string(),
                password: ADMIN_PASSWORD.to_string(),
            },
        )
        .unwrap();
        state
    }

    fn set(state: &mut AppState, field: &str, value: &str) {
        let event = if matches!(state.modal, Some(Modal::ListingEditor(_))) {
            Event::SetEditorField {
                field: field.to_string(),
                value: value.to_string(),
            }
        } else {
            Event::SetAdField {
                field: field.to_string(),
                value: value.to_string(),
            }
        };
        handle_event(state, &event).unwrap();
    }

    fn fill_ad(state: &mut AppState) {
        for (field, value) in [
            ("title", "Garden Cottage"),
            ("price", "320000"),
            ("location", "Kandy, Sri Lanka"),
            ("area", "1400"),
            ("contact_name", "Nimal"),
            ("contact_email", "nimal@example.com"),
            ("contact_phone", "0771234567"),
        ] {
            set(state, field, value);
        }
    }

    #[test]
    fn anonymous_submission_redirects_to_login() {
        let mut state = state();
        handle_event(&mut state, &Event::OpenPostAd).unwrap();
        fill_ad(&mut state);

        let (render, actions) = handle_event(&mut state, &Event::SubmitAd).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.modal, Some(Modal::Auth(AuthMode::Login)));
        assert_eq!(state.catalog.len(), 12);
        assert_eq!(state.ad_form, AdForm::default());
    }

    #[test]
    fn signed_in_submission_prepends_unfeatured_listing() {
        let mut state = state();
        handle_event(
            &mut state,
            &Event::Login {
                email: "nimal@example.com".to_string(),
                password: "x".to_string(),
            },
        )
        .unwrap();
        handle_event(&mut state, &Event::OpenPostAd).unwrap();
        fill_ad(&mut state);

        let (_, actions) = handle_event(&mut state, &Event::SubmitAd).unwrap();
        assert_eq!(messages(&actions), vec![(NoticeLevel::Success, POSTED.to_string())]);
        let first = &state.catalog.listings()[0];
        assert_eq!(first.id, 13);
        assert_eq!(first.title, "Garden Cottage");
        assert!(!first.featured);
        assert_eq!(state.modal, None);
    }

    #[test]
    fn submit_needs_the_post_ad_dialog() {
        let mut state = state();
        state.session.login("nimal@example.com", "");
        fill_ad(&mut state);

        let (render, actions) = handle_event(&mut state, &Event::SubmitAd).unwrap();
        assert!(!render && actions.is_empty());
        assert_eq!(state.catalog.len(), 12);
        assert_eq!(state.ad_form.title, "Garden Cottage");
    }

    #[test]
    fn invalid_ad_keeps_dialog_open_with_errors() {
        let mut state = state();
        state.session.login("a@b.c", "");
        handle_event(&mut state, &Event::OpenPostAd).unwrap();
        set(&mut state, "title", "Only a title");

        handle_event(&mut state, &Event::SubmitAd).unwrap();
        assert_eq!(state.modal, Some(Modal::PostAd));
        assert_eq!(state.form_errors.get("price"), Some("Valid price is required"));
        assert_eq!(state.form_errors.get("title"), None);
        assert_eq!(state.catalog.len(), 12);
    }

    #[test]
    fn bad_admin_credentials_notify_and_keep_dialog() {
        let mut state = state();
        handle_event(&mut state, &Event::OpenAdminLogin).unwrap();
        let (render, actions) = handle_event(
            &mut state,
            &Event::AdminLogin {
                email: ADMIN_EMAIL.to_string(),
                password: "admin".to_string(),
            },
        )
        .unwrap();

        assert!(!render);
        assert_eq!(
            messages(&actions),
            vec![(NoticeLevel::Error, "Invalid admin credentials!".to_string())]
        );
        assert_eq!(state.session, Session::Anonymous);
        assert_eq!(state.modal, Some(Modal::AdminLogin));
    }

    #[test]
    fn back_office_requires_admin() {
        let mut state = state();
        assert!(matches!(
            handle_event(&mut state, &Event::DeleteListing(1)),
            Err(CeylandError::AdminRequired)
        ));
        assert_eq!(state.catalog.len(), 12);
    }

    #[test]
    fn admin_ignores_public_events() {
        let mut state = admin();
        let (render, actions) = handle_event(&mut state, &Event::Navigate(Page::Rentals)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.page, Page::Home);
    }

    #[test]
    fn admin_add_appends_with_next_id() {
        let mut state = admin();
        handle_event(&mut state, &Event::OpenEditor(None)).unwrap();
        for (field, value) in [
            ("title", "Lake House"),
            ("price", "900000"),
            ("location", "Nuwara Eliya"),
            ("area", "3000"),
            ("featured", "yes"),
        ] {
            set(&mut state, field, value);
        }

        let (_, actions) = handle_event(&mut state, &Event::SaveListing).unwrap();
        assert_eq!(
            messages(&actions),
            vec![(NoticeLevel::Success, "Property added successfully!".to_string())]
        );
        let last = state.catalog.listings().last().unwrap();
        assert_eq!((last.id, last.featured), (13, true));
    }

    #[test]
    fn admin_edit_merges_and_delete_removes() {
        let mut state = admin();
        handle_event(&mut state, &Event::OpenEditor(Some(2))).unwrap();
        assert_eq!(state.editor_form.title, "Downtown Apartment");
        set(&mut state, "price", "475000");
        let (_, actions) = handle_event(&mut state, &Event::SaveListing).unwrap();
        assert_eq!(
            messages(&actions),
            vec![(NoticeLevel::Success, "Property updated successfully!".to_string())]
        );
        let edited = state.catalog.get(2).unwrap();
        assert_eq!((edited.price, edited.bedrooms), (475_000, 2));

        let (_, actions) = handle_event(&mut state, &Event::DeleteListing(2)).unwrap();
        assert_eq!(
            messages(&actions),
            vec![(NoticeLevel::Success, "Property deleted successfully!".to_string())]
        );
        assert!(state.catalog.get(2).is_none());
    }

    #[test]
    fn missing_listing_reports_error_without_mutation() {
        let mut state = admin();
        let before = state.catalog.clone();
        let (_, actions) = handle_event(&mut state, &Event::DeleteListing(99)).unwrap();
        assert_eq!(messages(&actions), vec![(NoticeLevel::Error, NOT_FOUND.to_string())]);
        let (_, actions) = handle_event(&mut state, &Event::OpenEditor(Some(99))).unwrap();
        assert_eq!(messages(&actions), vec![(NoticeLevel::Error, NOT_FOUND.to_string())]);
        assert_eq!(state.catalog, before);
        assert_eq!(state.modal, None);
    }

    #[test]
    fn logout_messages_by_session() {
        let mut state = state();
        let (render, actions) = handle_event(&mut state, &Event::Logout).unwrap();
        assert!(!render && actions.is_empty());

        state.session.login("a@b.c", "");
        let (_, actions) = handle_event(&mut state, &Event::Logout).unwrap();
        assert_eq!(
            messages(&actions),
            vec![(NoticeLevel::Success, "Successfully logged out!".to_string())]
        );

        let mut state = admin();
        state.admin_query = "villa".to_string();
        let (_, actions) = handle_event(&mut state, &Event::Logout).unwrap();
        assert_eq!(
            messages(&actions),
            vec![(NoticeLevel::Success, "Admin logged out successfully!".to_string())]
        );
        assert!(state.admin_query.is_empty());
    }

    #[test]
    fn register_errors_stay_in_dialog() {
        let mut state = state();
        handle_event(&mut state, &Event::OpenAuth(AuthMode::Register)).unwrap();
        let form = RegistrationForm {
            name: "Kamal".to_string(),
            ..RegistrationForm::default()
        };
        let (_, actions) = handle_event(&mut state, &Event::Register(form)).unwrap();
        assert!(actions.is_empty());
        assert_eq!(state.modal, Some(Modal::Auth(AuthMode::Register)));
        assert!(!state.form_errors.is_empty());
        assert_eq!(state.session, Session::Anonymous);
    }

    #[test]
    fn unknown_bracket_is_an_error_and_leaves_criteria() {
        let mut state = state();
        handle_event(&mut state, &Event::Navigate(Page::Rentals)).unwrap();
        assert!(matches!(
            handle_event(&mut state, &Event::SetPrice("500000-1000000".to_string())),
            Err(CeylandError::UnknownBracket(_))
        ));
        assert!(state.page_criteria.is_default());
    }

    #[test]
    fn quit_emits_quit() {
        let mut state = state();
        assert_eq!(handle_event(&mut state, &Event::Quit).unwrap(), (false, vec![Action::Quit]));
    }
}
