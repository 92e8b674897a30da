//! Relative paths for media referenced by a beatmap.

use std::fmt;
use std::path::{Path, PathBuf};

/// A file location written in a beatmap, relative to the beatmap's own
/// directory.
///
/// On construction the raw text is trimmed of surrounding spaces and every
/// literal double-quote character is removed, since mappers often quote
/// file names in event records. No separator normalization or filesystem
/// lookup happens; two paths are equal exactly when their cleaned text is
/// equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RelativePath(String);

impl RelativePath {
    /// Creates a path from raw field text.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.trim_matches(' ').replace('"', ""))
    }

    /// The cleaned path text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` when the path text is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Joins this path onto the directory containing the beatmap, without
    /// checking that the target exists. An empty path yields `None`.
    #[must_use]
    pub fn resolve(&self, base_directory: &Path) -> Option<PathBuf> {
        (!self.0.is_empty()).then(|| base_directory.join(&self.0))
    }
}

impl From<&str> for RelativePath {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
