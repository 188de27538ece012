//! Dialog renderer, drawn as a boxed section below the page body.

use std::fmt::{self, Write};

use crate::ui::helpers::{pad, rule};
use crate::ui::theme::{Role, Theme};
use crate::ui::viewmodel::ModalView;

pub fn render_modal(out: &mut String, modal: &ModalView, theme: Theme) -> fmt::Result {
    writeln!(out, "{}", rule('='))?;
    writeln!(out, "{}", theme.bold(&modal.title))?;
    if let Some(notice) = &modal.notice {
        writeln!(out, "{}", theme.paint(Role::Featured, &format!("Notice: {notice}")))?;
    }
    for field in &modal.fields {
        writeln!(out, "  {}{}", pad(field.label, 16), field.value)?;
    }
    for error in &modal.errors {
        writeln!(out, "  {}", theme.paint(Role::Error, &format!("! {error}")))?;
    }
    writeln!(out, "  [{}]", modal.submit_label)?;
    writeln!(out, "{}", rule('='))
}
