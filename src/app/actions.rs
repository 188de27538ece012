//! Actions representing side effects to be executed by the runtime.
//!
//! The event handler never prints or exits on its own. It returns a
//! `Vec<Action>` and the runtime (`main.rs`) executes them in order.
//!
//! # Example
//!
//! ```rust
//! use ceyland::app::{Action, Notification};
//!
//! let actions = vec![Action::Notify(Notification::success("Property added successfully!"))];
//! assert_eq!(actions.len(), 1);
//! ```

use chrono::{DateTime, Utc};

/// Severity of a user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient message shown to the user, printed once under the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NoticeLevel,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Notification {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
            at: Utc::now(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
            at: Utc::now(),
        }
    }
}

/// Commands produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show a notification.
    Notify(Notification),

    /// Stop reading input and exit.
    Quit,
}

impl Action {
    /// The notification carried by this action, if any.
    #[must_use]
    pub const fn notification(&self) -> Option<&Notification> {
        match self {
            Self::Notify(notification) => Some(notification),
            Self::Quit => None,
        }
    }
}
