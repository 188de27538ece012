//! Path utilities: tilde expansion and the data directory.

use std::path::PathBuf;

fn home() -> Option<String> {
    std::env::var("HOME").ok().filter(|h| !h.is_empty())
}

/// Returns the directory holding Ceyland's trace files.
///
/// An explicit override wins (tilde-expanded). Otherwise this is
/// `$HOME/.local/share/ceyland`, or `./.ceyland` when `HOME` is unset.
///
/// # Examples
///
/// ```
/// use ceyland::infrastructure::data_dir;
///
/// assert_eq!(data_dir(Some("/tmp/ceyland")).to_str(), Some("/tmp/ceyland"));
/// ```
#[must_use]
pub fn data_dir(override_dir: Option<&str>) -> PathBuf {
    if let Some(dir) = override_dir.filter(|d| !d.trim().is_empty()) {
        return PathBuf::from(expand_tilde(dir.trim()));
    }
    home().map_or_else(
        || PathBuf::from(".ceyland"),
        |home| PathBuf::from(home).join(".local/share/ceyland"),
    )
}

/// Replaces a leading `~` with `$HOME`. Paths are returned unchanged when
/// `HOME` is unset or the path has no tilde prefix.
///
/// ```
/// use ceyland::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = home() else {
        return path.to_string();
    };
    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expands_against_home() {
        let Some(home) = home() else { return };
        let home = home.trim_end_matches('/').to_string();
        assert_eq!(expand_tilde("~/seed.json"), format!("{home}/seed.json"));
        assert_eq!(expand_tilde("~user/x"), "~user/x");
        assert_eq!(expand_tilde("relative/~/x"), "relative/~/x");
    }

    #[test]
    fn override_wins_over_default() {
        assert_eq!(data_dir(Some("/var/lib/ceyland")), PathBuf::from("/var/lib/ceyland"));
        assert_eq!(data_dir(Some("   ")), data_dir(None));
    }

    #[test]
    fn default_ends_in_ceyland() {
        assert!(data_dir(None).ends_with("ceyland") || data_dir(None).ends_with(".ceyland"));
    }
}
