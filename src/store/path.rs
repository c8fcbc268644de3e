//! Hierarchical key paths.

use std::fmt;

/// A location in the hierarchical store, rendered as a backslash-delimited
/// string.
///
/// Segments are opaque: the path type neither validates nor rewrites them.
/// Whether an empty segment is legal is up to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistryPath {
    raw: String,
}

impl RegistryPath {
    /// Create a path from a literal backslash-delimited string.
    pub fn new(path: impl Into<String>) -> Self {
        Self { raw: path.into() }
    }

    /// Append a segment, returning the extended path.
    pub fn join(&self, segment: &str) -> Self {
        Self {
            raw: format!("{}\\{}", self.raw, segment),
        }
    }

    /// Iterate over the path's segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.raw.split('\\')
    }

    /// The backslash-delimited rendering.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for RegistryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for RegistryPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}
