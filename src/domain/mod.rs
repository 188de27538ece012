//! Domain layer for the Ceyland catalog.
//!
//! Core types with no knowledge of pages, sessions or rendering.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`listing`]: Listing record, drafts and patches
//! - [`forms`]: Raw submission forms and their validation
//!
//! # Examples
//!
//! ```
//! use ceyland::domain::{AdForm, CeylandError};
//!
//! let form = AdForm::default();
//! assert!(matches!(form.validate(), Err(CeylandError::Validation(_))));
//! ```

pub mod error;
pub mod forms;
pub mod listing;

pub use error::{CeylandError, FieldErrors, Result};
pub use forms::{AdForm, AdSubmission, Contact, ListingForm, Registration, RegistrationForm};
pub use listing::{
    format_currency, format_thousands, Listing, ListingDraft, ListingId, ListingPatch, ListingType, DEFAULT_IMAGE,
};
