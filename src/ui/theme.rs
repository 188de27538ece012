//! Color roles and ANSI escape sequence generation.
//!
//! A [`Theme`] is either plain (no escapes, used for pipes and tests) or ANSI
//! (24-bit color). Components ask for a [`Role`] and never hard-code escapes.
//!
//! # Example
//!
//! ```rust
//! use ceyland::ui::theme::{Role, Theme};
//!
//! assert_eq!(Theme::plain().paint(Role::Price, "$450,000"), "$450,000");
//! assert!(Theme::ansi().paint(Role::Price, "$450,000").starts_with("\u{1b}[38;2;"));
//! ```

use std::io::IsTerminal;

/// What a piece of text means, independent of how it is colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Brand,
    Active,
    Price,
    Badge,
    Featured,
    Dim,
    Success,
    Error,
    Highlight,
}

impl Role {
    const fn hex(self) -> &'static str {
        match self {
            Self::Brand | Self::Active => "#2563eb",
            Self::Price => "#1d4ed8",
            Self::Badge => "#6b7280",
            Self::Featured => "#f59e0b",
            Self::Dim => "#9ca3af",
            Self::Success => "#16a34a",
            Self::Error => "#dc2626",
            Self::Highlight => "#facc15",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    ansi: bool,
}

impl Theme {
    #[must_use]
    pub const fn plain() -> Self {
        Self { ansi: false }
    }

    #[must_use]
    pub const fn ansi() -> Self {
        Self { ansi: true }
    }

    /// ANSI when stdout is a terminal, plain otherwise.
    #[must_use]
    pub fn detect() -> Self {
        if std::io::stdout().is_terminal() {
            Self::ansi()
        } else {
            Self::plain()
        }
    }

    #[must_use]
    pub const fn is_ansi(self) -> bool {
        self.ansi
    }

    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    #[must_use]
    pub fn paint(self, role: Role, text: &str) -> String {
        if !self.ansi {
            return text.to_string();
        }
        let (r, g, b) = Self::hex_to_rgb(role.hex());
        format!("\u{1b}[38;2;{r};{g};{b}m{text}\u{1b}[0m")
    }

    #[must_use]
    pub fn bold(self, text: &str) -> String {
        if self.ansi {
            format!("\u{1b}[1m{text}\u{1b}[0m")
        } else {
            text.to_string()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::plain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing_falls_back_to_white() {
        assert_eq!(Theme::hex_to_rgb("#2563eb"), (0x25, 0x63, 0xeb));
        assert_eq!(Theme::hex_to_rgb("nope"), (255, 255, 255));
    }

    #[test]
    fn plain_theme_adds_nothing() {
        let theme = Theme::plain();
        assert_eq!(theme.bold("Title"), "Title");
        assert_eq!(theme.paint(Role::Error, "x"), "x");
    }

    #[test]
    fn ansi_theme_wraps_and_resets() {
        let painted = Theme::ansi().paint(Role::Success, "ok");
        assert_eq!(painted, "\u{1b}[38;2;22;163;74mok\u{1b}[0m");
    }
}
