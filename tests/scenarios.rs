//! End-to-end scenarios driven through `handle_event`, the way the terminal
//! front-end drives the library.

use ceyland::app::{AuthMode, NoticeLevel};
use ceyland::catalog::ListingStore;
use ceyland::input::{parse_command, Command};
use ceyland::{handle_event, initialize, Action, AppState, CeylandError, Config, Event, Modal, Page};

fn fresh() -> AppState {
    initialize(&Config::default())
}

fn send(state: &mut AppState, event: Event) -> Vec<Action> {
    handle_event(state, &event).unwrap().1
}

fn type_line(state: &mut AppState, line: &str) -> Vec<Action> {
    let Command::Events(events) = parse_command(line).unwrap() else {
        panic!("'{line}' produced no events");
    };
    events.into_iter().flat_map(|event| send(state, event)).collect()
}

fn messages(actions: &[Action]) -> Vec<(NoticeLevel, String)> {
    actions
        .iter()
        .filter_map(Action::notification)
        .map(|n| (n.level, n.message.clone()))
        .collect()
}

fn fill_ad(state: &mut AppState) {
    type_line(
        state,
        "ad title=Garden Cottage price=320000 location=Kandy area=1400 \
         contact_name=Nimal contact_email=nimal@example.com contact_phone=0771234567",
    );
}

fn admin(state: &mut AppState) {
    type_line(state, "admin admin@ceylandproperty.com admin123");
    assert!(state.session.is_admin());
}

fn admin_add(state: &mut AppState, title: &str) -> Vec<Action> {
    send(state, Event::OpenEditor(None));
    type_line(state, &format!("set title={title} location=Galle price=90000 area=800"));
    send(state, Event::SaveListing)
}

#[test]
fn admin_credentials_are_exact() {
    let mut state = fresh();

    let actions = send(
        &mut state,
        Event::AdminLogin {
            email: "admin@ceylandproperty.com".to_string(),
            password: "admin124".to_string(),
        },
    );
    assert!(!state.session.is_user() && !state.session.is_admin());
    assert_eq!(messages(&actions), vec![(NoticeLevel::Error, "Invalid admin credentials!".to_string())]);

    let actions = send(
        &mut state,
        Event::AdminLogin {
            email: "admin@ceylandproperty.com".to_string(),
            password: "admin123".to_string(),
        },
    );
    assert!(state.session.is_admin());
    assert_eq!(messages(&actions), vec![(NoticeLevel::Success, "Welcome, Administrator!".to_string())]);
}

#[test]
fn anonymous_ad_opens_login_instead_of_posting() {
    let mut state = fresh();
    send(&mut state, Event::OpenPostAd);
    fill_ad(&mut state);

    let actions = send(&mut state, Event::SubmitAd);

    assert!(actions.is_empty());
    assert_eq!(state.catalog.len(), 12);
    assert_eq!(state.modal, Some(Modal::Auth(AuthMode::Login)));
    assert!(state.ad_form.title.is_empty());
}

#[test]
fn logged_in_ad_is_prepended_unfeatured() {
    let mut state = fresh();
    type_line(&mut state, "login nimal@example.com pw");
    send(&mut state, Event::OpenPostAd);
    fill_ad(&mut state);

    let actions = send(&mut state, Event::SubmitAd);

    let first = &state.catalog.listings()[0];
    assert_eq!((first.id, first.title.as_str(), first.featured), (13, "Garden Cottage", false));
    assert_eq!(state.modal, None);
    assert_eq!(messages(&actions)[0].0, NoticeLevel::Success);
}

#[test]
fn ids_follow_the_current_maximum() {
    let mut state = fresh();
    type_line(&mut state, "login nimal@example.com pw");
    send(&mut state, Event::OpenPostAd);
    fill_ad(&mut state);
    send(&mut state, Event::SubmitAd);
    assert_eq!(state.catalog.listings()[0].id, 13);

    send(&mut state, Event::Logout);
    admin(&mut state);
    admin_add(&mut state, "Harbour Loft");
    assert_eq!(state.catalog.listings().last().map(|l| l.id), Some(14));

    send(&mut state, Event::DeleteListing(14));
    assert!(state.catalog.get(14).is_none());
    admin_add(&mut state, "Harbour Loft Again");
    assert_eq!(state.catalog.get(14).map(|l| l.title.as_str()), Some("Harbour Loft Again"));
}

#[test]
fn add_then_remove_restores_catalog() {
    let mut state = fresh();
    let before = state.catalog.listings().to_vec();
    admin(&mut state);

    admin_add(&mut state, "Temporary");
    let actions = send(&mut state, Event::DeleteListing(13));

    assert_eq!(state.catalog.listings(), before.as_slice());
    assert_eq!(messages(&actions)[0].1, "Property deleted successfully!");
}

#[test]
fn editing_missing_listing_reports_not_found() {
    let mut state = fresh();
    admin(&mut state);
    let actions = send(&mut state, Event::OpenEditor(Some(99)));
    assert_eq!(messages(&actions), vec![(NoticeLevel::Error, "Property not found!".to_string())]);
    assert_eq!(state.modal, None);
}

#[test]
fn back_office_needs_admin() {
    let mut state = fresh();
    let err = handle_event(&mut state, &Event::DeleteListing(1)).unwrap_err();
    assert!(matches!(err, CeylandError::AdminRequired));
    assert_eq!(state.catalog.len(), 12);
}

#[test]
fn rentals_bracket_filters_out_every_rental() {
    let mut state = fresh();
    send(&mut state, Event::Navigate(Page::Rentals));

    send(&mut state, Event::SetPrice("1000-2000".to_string()));
    assert!(state.visible_listings().is_empty());

    send(&mut state, Event::SetPrice("all".to_string()));
    let mut prices: Vec<u64> = state.visible_listings().iter().map(|l| l.price).collect();
    prices.sort_unstable();
    assert_eq!(prices, vec![2500, 3800, 4200]);
}

#[test]
fn sale_bracket_is_rejected_on_rentals() {
    let mut state = fresh();
    send(&mut state, Event::Navigate(Page::Rentals));
    let err = handle_event(&mut state, &Event::SetPrice("2000000+".to_string())).unwrap_err();
    assert!(matches!(err, CeylandError::UnknownBracket(_)));
}

#[test]
fn home_search_survives_navigation() {
    let mut state = fresh();
    type_line(&mut state, "where CA");
    type_line(&mut state, "search");
    let home: Vec<u64> = state.visible_listings().iter().map(|l| l.id).collect();
    assert_eq!(home, vec![1, 3, 4, 6]);

    type_line(&mut state, "go villas");
    type_line(&mut state, "go home");
    assert_eq!(state.visible_listings().len(), 4);
}

#[test]
fn typed_session_round_trip() {
    let mut state = fresh();

    let actions = type_line(&mut state, "signup name=Jane Perera email=jane@example.com phone=0771 password=pw");
    assert!(state.session.is_user());
    assert_eq!(messages(&actions)[0].1, "Account created successfully!");

    let actions = type_line(&mut state, "logout");
    assert!(!state.session.is_user());
    assert_eq!(messages(&actions)[0].1, "Successfully logged out!");

    assert!(type_line(&mut state, "logout").is_empty());
}

#[test]
fn admin_surface_ignores_public_browsing() {
    let mut state = fresh();
    admin(&mut state);
    let (render, actions) = handle_event(&mut state, &Event::Navigate(Page::Rentals)).unwrap();
    assert!(!render && actions.is_empty());
    assert_eq!(state.page, Page::Home);
}
