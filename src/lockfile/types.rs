//! Common types for lockfile readers

use std::collections::HashMap;

/// Name → version table parsed from one lockfile
#[derive(Debug, Clone)]
pub struct LockedPackages {
    versions: HashMap<String, String>,
    /// Maps a package name to the key it is stored under
    normalize: fn(&str) -> String,
}

impl LockedPackages {
    pub fn new() -> Self {
        Self::with_normalizer(str::to_string)
    }

    /// Create a table whose lookups compare names through `normalize`
    pub fn with_normalizer(normalize: fn(&str) -> String) -> Self {
        Self {
            versions: HashMap::new(),
            normalize,
        }
    }

    /// Record a package version; the first version recorded for a name wins
    pub fn insert(&mut self, name: &str, version: &str) {
        self.versions
            .entry((self.normalize)(name))
            .or_insert_with(|| version.to_string());
    }

    pub fn version_of(&self, name: &str) -> Option<&str> {
        self.versions
            .get(&(self.normalize)(name))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

impl Default for LockedPackages {
    fn default() -> Self {
        Self::new()
    }
}

/// A version resolved for a directive, with the comparator of its ecosystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub version: String,
    pub comparator: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_first_version_for_duplicate_names() {
        let mut packages = LockedPackages::new();
        packages.insert("alpha", "1.0.0");
        packages.insert("alpha", "2.0.0");

        assert_eq!(packages.version_of("alpha"), Some("1.0.0"));
        assert_eq!(packages.len(), 1);
    }

    #[test]
    fn version_of_applies_normalizer_to_lookups() {
        let mut packages = LockedPackages::with_normalizer(|name| name.to_lowercase());
        packages.insert("Django", "4.2.0");

        assert_eq!(packages.version_of("DJANGO"), Some("4.2.0"));
        assert_eq!(packages.version_of("flask"), None);
    }
}
