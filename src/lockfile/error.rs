use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Unsupported lockfile type: {}", path.display())]
    UnsupportedLockfile { path: PathBuf },

    #[error("Failed to read lockfile {}: {source}", path.display())]
    LockfileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse lockfile {}: {message}", path.display())]
    LockfileParse { path: PathBuf, message: String },

    #[error("Package '{package}' not found in lockfile {}", lockfile.display())]
    PackageNotFound { package: String, lockfile: PathBuf },

    #[error("Lockfile cache lock poisoned")]
    CachePoisoned,
}

impl ResolveError {
    pub(crate) fn parse(path: &std::path::Path, message: impl Into<String>) -> Self {
        ResolveError::LockfileParse {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }
}
