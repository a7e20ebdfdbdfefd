//! package-lock.json reader (npm lockfile v1, v2 and v3)

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::lockfile::error::ResolveError;
use crate::lockfile::reader::{LockfileReader, read_lockfile_text};
use crate::lockfile::types::LockedPackages;

/// Reader for npm `package-lock.json` files
pub struct NpmLockfileReader;

#[derive(Debug, Deserialize)]
struct PackageLock {
    /// v2/v3 layout, keyed by install path (`node_modules/foo`)
    #[serde(default)]
    packages: HashMap<String, PackageLockEntry>,
    /// v1 layout, keyed by package name
    #[serde(default)]
    dependencies: HashMap<String, PackageLockEntry>,
}

#[derive(Debug, Deserialize)]
struct PackageLockEntry {
    version: Option<String>,
}

impl LockfileReader for NpmLockfileReader {
    fn lockfile_name(&self) -> &'static str {
        "package-lock.json"
    }

    fn comparator(&self) -> &'static str {
        "@"
    }

    fn read(&self, path: &Path) -> Result<LockedPackages, ResolveError> {
        let content = read_lockfile_text(path)?;
        let lock: PackageLock = serde_json::from_str(&content).map_err(|e| {
            warn!("Failed to parse package-lock.json at {}: {}", path.display(), e);
            ResolveError::parse(path, e.to_string())
        })?;

        let mut packages = LockedPackages::new();

        for (key, entry) in &lock.packages {
            if let (Some(name), Some(version)) = (top_level_name(key), &entry.version) {
                packages.insert(name, version);
            }
        }

        // v1 entries only fill in what the v2 table did not already record
        for (name, entry) in &lock.dependencies {
            if let Some(version) = &entry.version {
                packages.insert(name, version);
            }
        }

        Ok(packages)
    }
}

/// Package name for a top-level install path; nested installs and the root
/// project (empty key) are skipped.
fn top_level_name(key: &str) -> Option<&str> {
    let name = key.strip_prefix("node_modules/")?;
    if name.contains("/node_modules/") {
        return None;
    }
    Some(name)
}
