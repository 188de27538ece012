//! Header component renderer.
//!
//! Brand line, page navigation and account controls. The active page is
//! marked with `>` and the brand is centered.

use std::fmt::{self, Write};

use crate::ui::helpers::WIDTH;
use crate::ui::theme::{Role, Theme};
use crate::ui::viewmodel::HeaderInfo;

pub fn render_header(out: &mut String, header: &HeaderInfo, theme: Theme) -> fmt::Result {
    let padding = WIDTH.saturating_sub(header.brand.chars().count()) / 2;
    writeln!(out, "{}{}", " ".repeat(padding), theme.bold(&theme.paint(Role::Brand, &header.brand)))?;

    if !header.nav.is_empty() {
        let nav: Vec<String> = header
            .nav
            .iter()
            .map(|item| {
                if item.active {
                    theme.paint(Role::Active, &format!(">{}", item.label))
                } else {
                    item.label.to_string()
                }
            })
            .collect();
        writeln!(out, "{}", nav.join("  "))?;
    }

    writeln!(out, "{}", theme.paint(Role::Dim, &header.account.join(" | ")))
}
