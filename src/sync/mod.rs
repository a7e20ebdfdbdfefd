//! Sync orchestration over a whole file
//!
//! Every line is classified; lines carrying a sync directive are rebuilt with
//! the version their lockfile records, all other lines pass through verbatim.
//!
//! # Modules
//!
//! - [`reconstruct`]: rebuilds a matched line around a resolved version

pub mod reconstruct;

use std::borrow::Cow;
use std::iter::Enumerate;
use std::path::{Path, PathBuf};
use std::str::Lines;

use thiserror::Error;
use tracing::debug;

use crate::lockfile::error::ResolveError;
use crate::lockfile::registry::ResolverRegistry;
use crate::parser::{ClassifierError, LineClassifier, LineMatch};

pub use reconstruct::reconstruct;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("{}:{line}: {source}", path.display())]
    Resolve {
        path: PathBuf,
        /// 1-based line number of the directive
        line: usize,
        #[source]
        source: ResolveError,
    },
}

/// Rewrites sync directives in file contents using a resolver registry
pub struct Syncer<'r> {
    registry: &'r ResolverRegistry,
    classifier: LineClassifier,
}

impl<'r> Syncer<'r> {
    /// Build a syncer whose package lines recognise every comparator in `registry`
    pub fn new(registry: &'r ResolverRegistry) -> Result<Self, ClassifierError> {
        let classifier = LineClassifier::new(&registry.comparators())?;
        Ok(Self {
            registry,
            classifier,
        })
    }

    /// Lazily sync `text`, read from `source`, one output line per input line.
    ///
    /// Directive lockfile paths are relative to the directory of `source`.
    /// The sequence stops after the first error.
    pub fn sync<'a>(&'a self, text: &'a str, source: &'a Path) -> SyncLines<'a> {
        SyncLines {
            syncer: self,
            lines: text.lines().enumerate(),
            source,
            source_dir: source.parent().unwrap_or(Path::new("")),
            failed: false,
        }
    }

    /// Sync `text` and assemble the final file content
    pub fn render(&self, text: &str, source: &Path) -> Result<String, SyncError> {
        let lines = self.sync(text, source).collect::<Result<Vec<_>, _>>()?;
        Ok(assemble(lines))
    }

    fn sync_line(&self, matched: &LineMatch, source_dir: &Path) -> Result<String, ResolveError> {
        let directive = matched.directive();
        let lockfile = resolve_lockfile_path(source_dir, &directive.lockfile)?;
        let resolution = self.registry.resolve(&directive.package, &lockfile)?;

        debug!(
            package = %directive.package,
            lockfile = %lockfile.display(),
            from = matched.current_pin().unwrap_or("-"),
            to = %resolution.version,
            "Synced pin"
        );

        Ok(reconstruct(matched, &resolution))
    }
}

/// Lazy, single-pass sequence of synced lines
pub struct SyncLines<'a> {
    syncer: &'a Syncer<'a>,
    lines: Enumerate<Lines<'a>>,
    source: &'a Path,
    source_dir: &'a Path,
    failed: bool,
}

impl<'a> Iterator for SyncLines<'a> {
    type Item = Result<Cow<'a, str>, SyncError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let (index, line) = self.lines.next()?;
        let Some(matched) = self.syncer.classifier.classify(line) else {
            return Some(Ok(Cow::Borrowed(line)));
        };

        match self.syncer.sync_line(&matched, self.source_dir) {
            Ok(rebuilt) => Some(Ok(Cow::Owned(rebuilt))),
            Err(source) => {
                self.failed = true;
                Some(Err(SyncError::Resolve {
                    path: self.source.to_path_buf(),
                    line: index + 1,
                    source,
                }))
            }
        }
    }
}

/// Join directive lockfile text onto the source directory and canonicalize it
pub fn resolve_lockfile_path(source_dir: &Path, lockfile: &str) -> Result<PathBuf, ResolveError> {
    let joined = source_dir.join(lockfile);
    joined
        .canonicalize()
        .map_err(|source| ResolveError::LockfileUnreadable {
            path: joined,
            source,
        })
}

/// Join lines with `\n`, drop trailing whitespace and end with one newline
pub fn assemble<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut content = String::new();
    for (index, line) in lines.into_iter().enumerate() {
        if index > 0 {
            content.push('\n');
        }
        content.push_str(line.as_ref());
    }

    let mut content = content.trim_end().to_string();
    content.push('\n');
    content
}
