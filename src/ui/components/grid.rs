//! Listing grid renderer.
//!
//! Each card takes three lines:
//!
//! ```text
//! #1   Modern Luxury Villa                                      $1,250,000
//!      Beverly Hills, CA
//!      Villa · For Sale · Featured | 5 Beds · 4 Baths · 4,500 sqft
//! ```

use std::fmt::{self, Write};

use super::empty::render_empty_state;
use crate::ui::helpers::{pad, WIDTH};
use crate::ui::theme::{Role, Theme};
use crate::ui::viewmodel::{ListingCard, ListingsView, SellView};

const ID_COLUMN: usize = 5;
const PRICE_COLUMN: usize = 14;

pub fn render_listings(out: &mut String, view: &ListingsView, theme: Theme) -> fmt::Result {
    writeln!(out, "{}", theme.bold(&view.title))?;

    let filters: Vec<String> = view
        .filters
        .iter()
        .map(|f| {
            let value = if f.value.is_empty() { "-" } else { f.value.as_str() };
            format!("{}: {value}", f.label)
        })
        .collect();
    writeln!(out, "{}", filters.join("  "))?;

    if let Some(sort) = &view.sort {
        writeln!(out, "Sort: {} ({})", sort.selected, sort.options.join(", "))?;
    }

    writeln!(out, "{}", theme.paint(Role::Dim, &view.count))?;

    if let Some(empty) = &view.empty_state {
        return render_empty_state(out, empty, theme);
    }

    for card in &view.cards {
        render_card(out, card, theme)?;
    }
    Ok(())
}

fn render_card(out: &mut String, card: &ListingCard, theme: Theme) -> fmt::Result {
    let title_width = WIDTH - ID_COLUMN - PRICE_COLUMN;
    writeln!(
        out,
        "{}{}{}",
        pad(&format!("#{}", card.id), ID_COLUMN),
        theme.bold(&pad(&card.title, title_width)),
        theme.paint(Role::Price, &format!("{:>width$}", card.price, width = PRICE_COLUMN)),
    )?;
    writeln!(out, "{}{}", " ".repeat(ID_COLUMN), card.location)?;

    let badges: Vec<String> = card
        .badges
        .iter()
        .map(|badge| {
            if badge == "Featured" {
                theme.paint(Role::Featured, badge)
            } else {
                theme.paint(Role::Badge, badge)
            }
        })
        .collect();
    writeln!(
        out,
        "{}{} | {}",
        " ".repeat(ID_COLUMN),
        badges.join(" · "),
        card.facts.join(" · ")
    )
}

pub fn render_sell(out: &mut String, view: &SellView, theme: Theme) -> fmt::Result {
    writeln!(out, "{}", theme.bold(&view.title))?;
    writeln!(out, "How It Works")?;
    for (step, text) in view.steps.iter().enumerate() {
        writeln!(out, "  {}. {text}", step + 1)?;
    }
    writeln!(out, "{}", theme.paint(Role::Active, &view.call_to_action))
}
