//! Error types for the Ceyland catalog.
//!
//! This module defines the centralized error type [`CeylandError`] and a type alias
//! [`Result`] used throughout the crate. Every failure here is recoverable: the
//! user corrects the input and tries again. Nothing is retried automatically.

use std::collections::BTreeMap;
use std::fmt;

use thiserror::Error;

use super::listing::ListingId;

/// Per-field validation messages collected from a submission form.
///
/// Keys are form field names (`title`, `price`, `contact_email`, ...) so the
/// view layer can show each message next to the offending input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Converts the collected messages into a `Result`.
    ///
    /// # Errors
    ///
    /// Returns [`CeylandError::Validation`] if at least one field failed.
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CeylandError::Validation(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&joined)
    }
}

/// The main error type for catalog, session and configuration operations.
#[derive(Debug, Error)]
pub enum CeylandError {
    /// A listing or account form failed validation.
    ///
    /// Submission is blocked until every field in the map is corrected.
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// The admin email/password pair did not match.
    #[error("Invalid admin credentials")]
    InvalidCredentials,

    /// No listing with this id exists in the catalog.
    #[error("Listing not found: {0}")]
    NotFound(ListingId),

    /// A back-office command was issued without an admin session.
    #[error("Administrator session required")]
    AdminRequired,

    /// A price bracket token is not offered on the current page.
    #[error("Unknown price bracket: {0}")]
    UnknownBracket(String),

    /// A sort key is not offered on the current page.
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    /// A page name did not match any known page.
    #[error("Unknown page: {0}")]
    UnknownPage(String),

    /// A typed command could not be understood.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Seed catalog could not be parsed.
    #[error("Seed error: {0}")]
    Seed(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for Ceyland operations.
pub type Result<T> = std::result::Result<T, CeylandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_field_errors_are_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn field_errors_keep_one_message_per_field() {
        let mut errors = FieldErrors::new();
        errors.insert("title", "Title is required");
        errors.insert("title", "Title is still required");
        errors.insert("area", "Valid area is required");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("title"), Some("Title is still required"));
        assert_eq!(
            errors.to_string(),
            "area: Valid area is required, title: Title is still required"
        );
        assert!(matches!(errors.into_result(), Err(CeylandError::Validation(_))));
    }
}
