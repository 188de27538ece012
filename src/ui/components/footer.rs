//! Footer component renderer with centered command hints.

use std::fmt::{self, Write};

use crate::ui::helpers::{truncate, WIDTH};
use crate::ui::theme::{Role, Theme};
use crate::ui::viewmodel::FooterInfo;

pub fn render_footer(out: &mut String, footer: &FooterInfo, theme: Theme) -> fmt::Result {
    let hints = truncate(&footer.hints, WIDTH);
    let padding = WIDTH.saturating_sub(hints.chars().count()) / 2;
    writeln!(out, "{}{}", " ".repeat(padding), theme.paint(Role::Dim, &hints))
}
