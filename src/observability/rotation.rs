//! Size-rotated append-only file.
//!
//! When the next write would push the file past its limit, the file is
//! renamed to `<name>.1`, older backups shift up by one, and anything past
//! the retention count is removed:
//!
//! ```text
//! ceyland-otlp.json → ceyland-otlp.json.1 → .2 → .3 → (deleted)
//! ```

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
pub const MAX_BACKUP_FILES: usize = 3;

pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    file: Mutex<Option<File>>,
}

impl RotatingFile {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self::with_limits(path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    #[must_use]
    pub const fn with_limits(path: PathBuf, max_bytes: u64, backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            backups,
            file: Mutex::new(None),
        }
    }

    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    /// Appends `line` plus a newline, rotating first if it would not fit.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening or writing.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("rotation lock poisoned: {e}")))?;

        let current = fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0);
        let incoming = line.len() as u64 + 1;
        if current > 0 && current + incoming > self.max_bytes {
            *guard = None;
            self.rotate()?;
        }

        if guard.is_none() {
            *guard = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(file) = guard.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file unavailable"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn rotate(&self) -> io::Result<()> {
        if self.backups == 0 {
            return remove_if_present(&self.path);
        }

        remove_if_present(&self.backup_path(self.backups))?;
        for n in (1..self.backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }
}

fn remove_if_present(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("backups", &self.backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_until_limit_then_rotates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let file = RotatingFile::with_limits(path.clone(), 16, 2);

        file.write_line("aaaaaaaaaa").unwrap();
        file.write_line("bbbbbbbbbb").unwrap();
        file.write_line("cccccccccc").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "cccccccccc\n");
        assert_eq!(fs::read_to_string(dir.path().join("trace.json.1")).unwrap(), "bbbbbbbbbb\n");
        assert_eq!(fs::read_to_string(dir.path().join("trace.json.2")).unwrap(), "aaaaaaaaaa\n");
    }

    #[test]
    fn keeps_only_configured_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let file = RotatingFile::with_limits(path, 8, 2);

        for line in ["one1111", "two2222", "three33", "four444"] {
            file.write_line(line).unwrap();
        }

        assert!(dir.path().join("trace.json.2").exists());
        assert!(!dir.path().join("trace.json.3").exists());
        assert_eq!(fs::read_to_string(dir.path().join("trace.json.2")).unwrap(), "two2222\n");
    }

    #[test]
    fn oversized_first_line_is_still_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trace.json");
        let file = RotatingFile::with_limits(path.clone(), 4, 1);
        file.write_line("longer than four").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "longer than four\n");
    }
}
