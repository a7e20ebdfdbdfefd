//! Lockfile reader trait for the supported package managers

use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::lockfile::error::ResolveError;
use crate::lockfile::types::LockedPackages;

/// Trait for reading one ecosystem's lockfile format
///
/// Readers are stateless; parsed lockfiles are cached by the registry.
#[cfg_attr(test, automock)]
pub trait LockfileReader: Send + Sync {
    /// Base file name this reader handles (e.g. `yarn.lock`)
    fn lockfile_name(&self) -> &'static str;

    /// Token placed between package name and version on package lines
    fn comparator(&self) -> &'static str;

    /// Parse the lockfile at `path` into a name → version table
    fn read(&self, path: &Path) -> Result<LockedPackages, ResolveError>;
}

/// Read a lockfile's text, attributing I/O failures to the lockfile
pub(crate) fn read_lockfile_text(path: &Path) -> Result<String, ResolveError> {
    std::fs::read_to_string(path).map_err(|source| ResolveError::LockfileUnreadable {
        path: path.to_path_buf(),
        source,
    })
}
