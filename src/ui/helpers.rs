//! Shared rendering utilities: padding, truncation and match highlighting.
//!
//! Widths are counted in chars, not bytes, so listing titles with accented
//! characters line up.

use crate::ui::theme::{Role, Theme};

/// Width of every rendered line.
pub const WIDTH: usize = 80;

/// Cuts `text` to `width` chars, ending in `...` when shortened.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut cut: String = text.chars().take(keep).collect();
    cut.push_str("...");
    cut
}

/// Left-aligns `text` in a `width`-char column, truncating if needed.
#[must_use]
pub fn pad(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let fill = width.saturating_sub(text.chars().count());
    format!("{text}{}", " ".repeat(fill))
}

#[must_use]
pub fn rule(ch: char) -> String {
    ch.to_string().repeat(WIDTH)
}

/// Renders `text` with byte `ranges` emphasized.
///
/// ANSI themes color the matched runs; plain themes bracket them so matches
/// stay visible in logs and tests.
///
/// ```rust
/// use ceyland::ui::helpers::highlight;
/// use ceyland::ui::theme::Theme;
///
/// assert_eq!(highlight("Beach Villa", &[(0, 5)], Theme::plain()), "[Beach] Villa");
/// ```
#[must_use]
pub fn highlight(text: &str, ranges: &[(usize, usize)], theme: Theme) -> String {
    let mut out = String::with_capacity(text.len() + ranges.len() * 2);
    let mut cursor = 0;

    for &(start, end) in ranges {
        let (Some(before), Some(matched)) = (text.get(cursor..start), text.get(start..end)) else {
            continue;
        };
        out.push_str(before);
        if theme.is_ansi() {
            out.push_str(&theme.paint(Role::Highlight, matched));
        } else {
            out.push('[');
            out.push_str(matched);
            out.push(']');
        }
        cursor = end;
    }

    out.push_str(text.get(cursor..).unwrap_or_default());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_chars() {
        assert_eq!(truncate("Colombo", 10), "Colombo");
        assert_eq!(truncate("Beachfront Villa with Pool", 12), "Beachfron...");
        assert_eq!(truncate("Café Lounge", 6), "Caf...");
    }

    #[test]
    fn pad_fills_to_width() {
        assert_eq!(pad("abc", 5), "abc  ");
        assert_eq!(pad("abcdefgh", 6).chars().count(), 6);
    }

    #[test]
    fn highlight_multiple_runs() {
        assert_eq!(
            highlight("Modern Villa", &[(0, 1), (7, 9)], Theme::plain()),
            "[M]odern [Vi]lla"
        );
        assert_eq!(highlight("Villa", &[], Theme::plain()), "Villa");
    }

    #[test]
    fn highlight_skips_invalid_ranges() {
        assert_eq!(highlight("Villa", &[(3, 99)], Theme::plain()), "Villa");
    }
}
