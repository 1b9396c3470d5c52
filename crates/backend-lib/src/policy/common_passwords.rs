// ============================
// crates/backend-lib/src/policy/common_passwords.rs
// ============================
//! Blocklist of frequently used passwords.

use std::collections::HashSet;
use std::io;
use std::path::Path;

/// Read-only set of lowercase common passwords.
///
/// Built once at startup and shared behind an `Arc`; lookups lowercase the
/// candidate so membership is case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct CommonPasswords {
    entries: HashSet<String>,
}

impl CommonPasswords {
    /// An empty blocklist. No password is considered common.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a line-delimited word list. Lines are trimmed and blank lines skipped.
    pub fn from_list(list: &str) -> Self {
        list.lines().collect()
    }

    /// Read a word list from disk.
    pub fn try_load(path: impl AsRef<Path>) -> io::Result<Self> {
        let list = std::fs::read_to_string(path)?;
        Ok(Self::from_list(&list))
    }

    /// Read a word list from disk, falling back to an empty set when the file
    /// cannot be read. The common-password rule is then never triggered.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(set) => {
                tracing::info!(path = %path.display(), entries = set.len(), "Loaded common passwords list");
                set
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not load common passwords list");
                Self::empty()
            },
        }
    }

    /// Case-insensitive membership test
    pub fn contains(&self, password: &str) -> bool {
        !self.entries.is_empty() && self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CommonPasswords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|line| line.as_ref().trim().to_lowercase())
            .filter(|line| !line.is_empty())
            .collect();
        Self { entries }
    }
}
