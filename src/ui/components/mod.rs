//! Composable UI component renderers.
//!
//! Each component appends its lines to a shared `String` buffer.
//!
//! # Components
//!
//! - [`header`]: Brand, navigation and account controls
//! - [`grid`]: Filter summary and listing cards; the sell page
//! - [`empty`]: Empty state message for grids with no matches
//! - [`table`]: Back-office stats and tables
//! - [`modal`]: Open dialog with field values and errors
//! - [`footer`]: Command hints
//!
//! # Layout
//!
//! ```text
//! [Header]
//! [Border]
//! [Body: grid | sell page | dashboard]
//! [Modal, if open]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod grid;
mod header;
mod modal;
mod table;

use std::fmt::{self, Write};

use crate::ui::helpers::rule;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{Body, UIViewModel};

pub use empty::render_empty_state;

/// Renders the full page layout into `out`.
pub fn render_page(out: &mut String, vm: &UIViewModel, theme: Theme) -> fmt::Result {
    header::render_header(out, &vm.header, theme)?;
    writeln!(out, "{}", rule('-'))?;

    match &vm.body {
        Body::Listings(view) => grid::render_listings(out, view, theme)?,
        Body::Sell(view) => grid::render_sell(out, view, theme)?,
        Body::Admin(view) => table::render_admin(out, view, theme)?,
    }

    if let Some(modal) = &vm.modal {
        modal::render_modal(out, modal, theme)?;
    }

    writeln!(out, "{}", rule('-'))?;
    footer::render_footer(out, &vm.footer, theme)
}
