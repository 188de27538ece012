//! Application layer coordinating state, events, and actions.
//!
//! Sits between the runtime (`main.rs`) and the domain/catalog layers.
//!
//! # Architecture
//!
//! ```text
//! Typed command → Event → handle_event → State mutation → Actions → Side effects
//!                                              ↓
//!                                   compute_viewmodel → render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`admin`]: Dashboard stats, mock members and quick search
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Page, modal and dashboard-tab types
//! - [`session`]: Mock login / admin session controller
//! - [`state`]: Central application state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use ceyland::app::{handle_event, AppState, Event};
//! use ceyland::catalog::MemoryCatalog;
//!
//! let mut state = AppState::new(MemoryCatalog::default());
//! let (_render, actions) = handle_event(&mut state, &Event::Quit)?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), ceyland::domain::CeylandError>(())
//! ```

pub mod actions;
pub mod admin;
pub mod handler;
pub mod modes;
pub mod session;
pub mod state;

pub use actions::{Action, NoticeLevel, Notification};
pub use handler::{handle_event, Event};
pub use modes::{AdminTab, AuthMode, Modal, Page};
pub use session::Session;
pub use state::AppState;
