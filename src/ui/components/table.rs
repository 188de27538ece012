//! Back-office dashboard renderer: stat tiles, tab strip and the active tab's table.

use std::fmt::{self, Write};

use crate::app::modes::AdminTab;
use crate::ui::helpers::{highlight, pad, truncate};
use crate::ui::theme::{Role, Theme};
use crate::ui::viewmodel::{AdminContent, AdminRow, AdminView, MemberRow};

const TABS: [(AdminTab, &str); 3] = [
    (AdminTab::Properties, "Properties"),
    (AdminTab::Users, "Users"),
    (AdminTab::Settings, "Settings"),
];

pub fn render_admin(out: &mut String, view: &AdminView, theme: Theme) -> fmt::Result {
    let tiles: Vec<String> = view
        .stats
        .iter()
        .map(|tile| format!("{}: {}", tile.label, theme.bold(&tile.value)))
        .collect();
    writeln!(out, "{}", tiles.join("  |  "))?;

    let tabs: Vec<String> = TABS
        .iter()
        .map(|&(tab, label)| {
            if tab == view.tab {
                theme.paint(Role::Active, &format!("[{label}]"))
            } else {
                format!(" {label} ")
            }
        })
        .collect();
    writeln!(out, "{}", tabs.join(" "))?;

    match &view.content {
        AdminContent::Properties { query, rows } => render_properties(out, query, rows, theme),
        AdminContent::Users(members) => render_members(out, members, theme),
        AdminContent::Settings(settings) => {
            for (label, value) in settings {
                writeln!(out, "{}{value}", pad(label, 16))?;
            }
            Ok(())
        }
    }
}

fn render_properties(out: &mut String, query: &str, rows: &[AdminRow], theme: Theme) -> fmt::Result {
    if !query.is_empty() {
        writeln!(out, "Search: {query}")?;
    }
    writeln!(
        out,
        "{}",
        theme.bold(&format!(
            "{}{}{}{}{}{}",
            pad("ID", 5),
            pad("TITLE", 28),
            pad("LOCATION", 18),
            pad("TYPE", 11),
            pad("PRICE", 12),
            "STATUS"
        ))
    )?;

    for row in rows {
        // highlight ranges index into the full title, so only highlight when it fits
        let title = if row.title.chars().count() <= 27 {
            let shown = highlight(&row.title, &row.highlight_ranges, theme);
            let fill = 28usize.saturating_sub(row.title.chars().count());
            format!("{shown}{}", " ".repeat(fill))
        } else {
            pad(&row.title, 28)
        };
        let status = if row.featured {
            format!("{} {}", row.listing_type, theme.paint(Role::Featured, "Featured"))
        } else {
            row.listing_type.to_string()
        };
        writeln!(
            out,
            "{}{title}{}{}{}{status}",
            pad(&row.id.to_string(), 5),
            pad(&row.location, 18),
            pad(&row.property_type, 11),
            pad(&row.price, 12),
        )?;
    }

    if rows.is_empty() {
        writeln!(out, "{}", theme.paint(Role::Dim, "No properties match the search."))?;
    }
    Ok(())
}

fn render_members(out: &mut String, members: &[MemberRow], theme: Theme) -> fmt::Result {
    writeln!(
        out,
        "{}",
        theme.bold(&format!("{}{}{}{}", pad("NAME", 16), pad("EMAIL", 22), pad("PHONE", 18), "JOIN DATE"))
    )?;
    for member in members {
        writeln!(
            out,
            "{}{}{}{}",
            pad(&member.name, 16),
            pad(&truncate(&member.email, 21), 22),
            pad(&member.phone, 18),
            member.joined
        )?;
    }
    Ok(())
}
