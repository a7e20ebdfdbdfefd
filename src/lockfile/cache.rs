use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info};

use crate::lockfile::error::ResolveError;
use crate::lockfile::types::LockedPackages;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Ecosystem key (lockfile base name)
    pub lockfile_name: &'static str,
    /// Canonical lockfile path
    pub path: PathBuf,
}

/// Parsed lockfiles for the duration of one run
///
/// Each key is parsed at most once; concurrent lookups of the same key wait
/// for the first parse instead of repeating it.
#[derive(Default)]
pub struct LockfileCache {
    entries: Mutex<HashMap<CacheKey, Arc<LockedPackages>>>,
}

impl LockfileCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached table for `key`, parsing it with `load` on a miss.
    ///
    /// A failed load is not cached.
    pub fn get_or_load<F>(&self, key: CacheKey, load: F) -> Result<Arc<LockedPackages>, ResolveError>
    where
        F: FnOnce(&Path) -> Result<LockedPackages, ResolveError>,
    {
        let mut entries = self.lock_entries()?;

        if let Some(packages) = entries.get(&key) {
            debug!("Lockfile cache hit for {}", key.path.display());
            return Ok(Arc::clone(packages));
        }

        let packages = Arc::new(load(&key.path)?);
        info!(
            "Parsed {} ({} packages) from {}",
            key.lockfile_name,
            packages.len(),
            key.path.display()
        );
        entries.insert(key, Arc::clone(&packages));

        Ok(packages)
    }

    pub fn len(&self) -> Result<usize, ResolveError> {
        Ok(self.lock_entries()?.len())
    }

    pub fn is_empty(&self) -> Result<bool, ResolveError> {
        Ok(self.len()? == 0)
    }

    fn lock_entries(
        &self,
    ) -> Result<MutexGuard<'_, HashMap<CacheKey, Arc<LockedPackages>>>, ResolveError> {
        self.entries.lock().map_err(|_| ResolveError::CachePoisoned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn key(path: &str) -> CacheKey {
        CacheKey {
            lockfile_name: "yarn.lock",
            path: PathBuf::from(path),
        }
    }

    fn table(version: &str) -> LockedPackages {
        let mut packages = LockedPackages::new();
        packages.insert("alpha", version);
        packages
    }

    #[test]
    fn get_or_load_parses_each_path_once() {
        let cache = LockfileCache::new();
        let loads = Cell::new(0);

        for _ in 0..3 {
            let packages = cache
                .get_or_load(key("/repo/yarn.lock"), |_| {
                    loads.set(loads.get() + 1);
                    Ok(table("1.0.0"))
                })
                .unwrap();
            assert_eq!(packages.version_of("alpha"), Some("1.0.0"));
        }

        assert_eq!(loads.get(), 1);
        assert_eq!(cache.len().unwrap(), 1);
    }

    #[test]
    fn get_or_load_keeps_distinct_paths_apart() {
        let cache = LockfileCache::new();

        let first = cache
            .get_or_load(key("/a/yarn.lock"), |_| Ok(table("1.0.0")))
            .unwrap();
        let second = cache
            .get_or_load(key("/b/yarn.lock"), |_| Ok(table("2.0.0")))
            .unwrap();

        assert_eq!(first.version_of("alpha"), Some("1.0.0"));
        assert_eq!(second.version_of("alpha"), Some("2.0.0"));
        assert_eq!(cache.len().unwrap(), 2);
    }

    #[test]
    fn get_or_load_does_not_cache_failures() {
        let cache = LockfileCache::new();

        let failed = cache.get_or_load(key("/repo/yarn.lock"), |path| {
            Err(ResolveError::parse(path, "broken"))
        });
        assert!(failed.is_err());
        assert!(cache.is_empty().unwrap());

        let loaded = cache
            .get_or_load(key("/repo/yarn.lock"), |_| Ok(table("3.0.0")))
            .unwrap();
        assert_eq!(loaded.version_of("alpha"), Some("3.0.0"));
    }

    #[test]
    fn get_or_load_reports_poisoned_lock() {
        let cache = Arc::new(LockfileCache::new());
        let poisoner = Arc::clone(&cache);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.entries.lock().unwrap();
            panic!("poison the cache lock");
        })
        .join();

        let result = cache.get_or_load(key("/repo/yarn.lock"), |_| Ok(table("1.0.0")));

        assert!(matches!(result, Err(ResolveError::CachePoisoned)));
        assert!(matches!(cache.len(), Err(ResolveError::CachePoisoned)));
    }
}
