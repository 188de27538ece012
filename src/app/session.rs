//! Mock session controller.
//!
//! There is no real authentication. User login accepts any input, sign-up
//! only requires non-empty fields, and admin login compares against one
//! fixed email/password pair. Not a security model.
//!
//! ```text
//! Anonymous ──login/register──▶ User ──logout──▶ Anonymous
//! Anonymous ──admin login────▶ Admin ──logout──▶ Anonymous
//! ```
//!
//! Admin login replaces whatever session is current; a user session is
//! never promoted or kept underneath.

use crate::domain::{CeylandError, RegistrationForm, Result};

pub const ADMIN_EMAIL: &str = "admin@ceylandproperty.com";
pub const ADMIN_PASSWORD: &str = "admin123";

/// Current identity. Exactly one variant at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Anonymous,
    User {
        name: String,
        email: String,
    },
    Admin,
}

impl Session {
    #[must_use]
    pub const fn is_user(&self) -> bool {
        matches!(self, Self::User { .. })
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Signs in as a user. The display name is the email's local part.
    ///
    /// Returns the success notification text.
    pub fn login(&mut self, email: &str, _password: &str) -> &'static str {
        let email = email.trim();
        let name = email.split('@').next().unwrap_or(email).to_string();
        tracing::debug!(user = %name, "user logged in");
        *self = Self::User {
            name,
            email: email.to_string(),
        };
        "Successfully logged in!"
    }

    /// Creates a mock account and signs in as it.
    ///
    /// # Errors
    ///
    /// Returns [`CeylandError::Validation`] if any field is empty; the
    /// session is unchanged.
    pub fn register(&mut self, form: &RegistrationForm) -> Result<&'static str> {
        let registration = form.validate()?;
        tracing::debug!(user = %registration.name, "user registered");
        *self = Self::User {
            name: registration.name,
            email: registration.email,
        };
        Ok("Account created successfully!")
    }

    /// Enters the back-office if the pair matches exactly.
    ///
    /// # Errors
    ///
    /// Returns [`CeylandError::InvalidCredentials`] otherwise; the session is
    /// unchanged.
    pub fn admin_login(&mut self, email: &str, password: &str) -> Result<&'static str> {
        if email != ADMIN_EMAIL || password != ADMIN_PASSWORD {
            tracing::warn!("admin login rejected");
            return Err(CeylandError::InvalidCredentials);
        }
        if self.is_user() {
            tracing::debug!("user session replaced by admin session");
        }
        *self = Self::Admin;
        Ok("Welcome, Administrator!")
    }

    /// Returns to anonymous. `None` if nobody was signed in.
    pub fn logout(&mut self) -> Option<&'static str> {
        let message = match self {
            Self::Anonymous => return None,
            Self::User { .. } => "Successfully logged out!",
            Self::Admin => "Admin logged out successfully!",
        };
        *self = Self::Anonymous;
        Some(message)
    }
}
