//! Lockfile name → reader table and version resolution

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::lockfile::cache::{CacheKey, LockfileCache};
use crate::lockfile::error::ResolveError;
use crate::lockfile::reader::LockfileReader;
use crate::lockfile::readers::{NpmLockfileReader, PoetryLockfileReader, YarnLockfileReader};
use crate::lockfile::types::Resolution;

/// Dispatches lockfiles to their ecosystem reader by base file name and
/// caches every parsed lockfile for the lifetime of the registry.
pub struct ResolverRegistry {
    readers: HashMap<&'static str, Arc<dyn LockfileReader>>,
    cache: LockfileCache,
}

impl ResolverRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            readers: HashMap::new(),
            cache: LockfileCache::new(),
        }
    }

    /// Register a reader under its lockfile name, replacing any previous one
    pub fn register(&mut self, reader: Arc<dyn LockfileReader>) {
        self.readers.insert(reader.lockfile_name(), reader);
    }

    /// Distinct comparator tokens of all registered ecosystems, sorted
    pub fn comparators(&self) -> Vec<&'static str> {
        let mut comparators: Vec<_> = self.readers.values().map(|r| r.comparator()).collect();
        comparators.sort_unstable();
        comparators.dedup();
        comparators
    }

    /// Supported lockfile names, sorted
    pub fn lockfile_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.readers.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Look up the reader for a lockfile by its base name
    pub fn reader_for(&self, lockfile: &Path) -> Result<&Arc<dyn LockfileReader>, ResolveError> {
        lockfile
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| self.readers.get(name))
            .ok_or_else(|| ResolveError::UnsupportedLockfile {
                path: lockfile.to_path_buf(),
            })
    }

    /// Resolve the version `lockfile` records for `package`.
    ///
    /// `lockfile` should already be canonical so that every spelling of the
    /// same file shares one cache entry.
    pub fn resolve(&self, package: &str, lockfile: &Path) -> Result<Resolution, ResolveError> {
        let reader = self.reader_for(lockfile)?;
        let key = CacheKey {
            lockfile_name: reader.lockfile_name(),
            path: lockfile.to_path_buf(),
        };

        let packages = self.cache.get_or_load(key, |path| reader.read(path))?;
        let version = packages
            .version_of(package)
            .ok_or_else(|| ResolveError::PackageNotFound {
                package: package.to_string(),
                lockfile: lockfile.to_path_buf(),
            })?;

        Ok(Resolution {
            version: version.to_string(),
            comparator: reader.comparator(),
        })
    }
}

impl Default for ResolverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the registry with every supported ecosystem
pub fn create_default_registry() -> ResolverRegistry {
    let mut registry = ResolverRegistry::new();

    registry.register(Arc::new(YarnLockfileReader));
    registry.register(Arc::new(PoetryLockfileReader));
    registry.register(Arc::new(NpmLockfileReader));

    registry
}
