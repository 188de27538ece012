//! Empty state component renderer.
//!
//! Shown in place of the card grid when no listing matches.

use std::fmt::{self, Write};

use crate::ui::helpers::WIDTH;
use crate::ui::theme::{Role, Theme};
use crate::ui::viewmodel::EmptyState;

fn centered(text: &str) -> String {
    let padding = WIDTH.saturating_sub(text.chars().count()) / 2;
    format!("{}{text}", " ".repeat(padding))
}

/// Renders the message and subtitle on two centered lines after a blank line.
pub fn render_empty_state(out: &mut String, empty: &EmptyState, theme: Theme) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "{}", theme.bold(&centered(&empty.message)))?;
    writeln!(out, "{}", theme.paint(Role::Dim, &centered(&empty.subtitle)))
}
