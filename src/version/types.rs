//! Resolution results shared across providers, orchestrator and manifest

use indexmap::IndexMap;
use indexmap::map::Iter;

/// A single label resolved by a provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVersion {
    /// Key the version is stored under (e.g. "node.lts", "python3", "go")
    pub label: String,
    /// Canonical version, or raw tool output for the version manager
    pub version: String,
}

impl ResolvedVersion {
    pub fn new(label: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            version: version.into(),
        }
    }
}

/// Label -> version mapping accumulated over one orchestration pass.
///
/// Insertion order is kept; inserting an existing label overwrites it in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionMap {
    entries: IndexMap<String, String>,
}

impl VersionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a resolved version, returning the value it replaced
    pub fn insert(&mut self, resolved: ResolvedVersion) -> Option<String> {
        self.entries.insert(resolved.label, resolved.version)
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries.get(label).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, String> {
        self.entries.iter()
    }
}

impl Extend<ResolvedVersion> for VersionMap {
    fn extend<T: IntoIterator<Item = ResolvedVersion>>(&mut self, iter: T) {
        for resolved in iter {
            self.insert(resolved);
        }
    }
}

impl FromIterator<ResolvedVersion> for VersionMap {
    fn from_iter<T: IntoIterator<Item = ResolvedVersion>>(iter: T) -> Self {
        let mut map = VersionMap::new();
        map.extend(iter);
        map
    }
}

impl<'a> IntoIterator for &'a VersionMap {
    type Item = (&'a String, &'a String);
    type IntoIter = Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
