//! yarn.lock reader (classic v1 and berry)

use std::panic;
use std::path::Path;

use tracing::warn;

use crate::lockfile::error::ResolveError;
use crate::lockfile::reader::{LockfileReader, read_lockfile_text};
use crate::lockfile::types::LockedPackages;

/// Reader for Yarn `yarn.lock` files
pub struct YarnLockfileReader;

impl LockfileReader for YarnLockfileReader {
    fn lockfile_name(&self) -> &'static str {
        "yarn.lock"
    }

    fn comparator(&self) -> &'static str {
        "@"
    }

    fn read(&self, path: &Path) -> Result<LockedPackages, ResolveError> {
        let content = read_lockfile_text(path)?;
        parse_yarn_lock(&content).map_err(|message| {
            warn!("Failed to parse yarn.lock at {}: {}", path.display(), message);
            ResolveError::parse(path, message)
        })
    }
}

/// Collect name → version pairs; a name resolved to several versions keeps
/// the first entry, as Yarn lists them.
fn parse_yarn_lock(content: &str) -> Result<LockedPackages, String> {
    // yarn_lock_parser can panic on some inputs
    let lockfile = panic::catch_unwind(panic::AssertUnwindSafe(|| {
        yarn_lock_parser::parse_str(content)
    }))
    .map_err(|_| "yarn.lock parser panicked".to_string())?
    .map_err(|e| format!("{e:?}"))?;

    let mut packages = LockedPackages::new();
    for entry in &lockfile.entries {
        packages.insert(&entry.name, &entry.version);
    }

    Ok(packages)
}
