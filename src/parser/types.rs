//! Common types for line parsers

/// Package name and lockfile reference parsed from a `# sync:` comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncDirective {
    /// Package to look up in the lockfile
    pub package: String,
    /// Lockfile path, relative to the directory of the file being synced
    pub lockfile: String,
}

/// Sequence item carrying a package and an optional pinned version
///
/// ```text
///   - "alpha@1.0.0"  # sync:yarn.lock
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLine {
    /// Indentation, dash and following whitespace (e.g. `"  - "`)
    pub prefix: String,
    /// Quote character surrounding the payload, if any
    pub quote: Option<char>,
    /// Existing comparator and version (e.g. `@1.0.0`); discarded on rewrite
    pub pinned: Option<String>,
    /// Everything from the whitespace before `#` to the end of the line
    pub sync_comment: String,
    /// The directive; its package is the package written in the payload
    pub directive: SyncDirective,
}

/// Mapping entry `rev: <version>` whose package lives in the directive
///
/// ```text
///   rev: v1.0.0  # sync:pre-commit-hooks:poetry.lock
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionLine {
    /// Indentation, `rev:` and following whitespace (e.g. `"  rev: "`)
    pub prefix: String,
    /// Quote character surrounding the version, if any
    pub quote: Option<char>,
    /// Existing version text; discarded on rewrite
    pub current: String,
    /// Everything from the whitespace before `#` to the end of the line
    pub sync_comment: String,
    pub directive: SyncDirective,
}

/// A line recognised as carrying a sync directive
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineMatch {
    Package(PackageLine),
    Revision(RevisionLine),
}

impl LineMatch {
    pub fn directive(&self) -> &SyncDirective {
        match self {
            LineMatch::Package(line) => &line.directive,
            LineMatch::Revision(line) => &line.directive,
        }
    }

    /// Pin currently on the line (`@1.0.0` for package lines, `v1.0.0` for revisions)
    pub fn current_pin(&self) -> Option<&str> {
        match self {
            LineMatch::Package(line) => line.pinned.as_deref(),
            LineMatch::Revision(line) => Some(line.current.as_str()),
        }
    }
}

/// Convert an optional `quote` capture into a quote character
pub(crate) fn quote_char(capture: Option<regex::Match<'_>>) -> Option<char> {
    capture.and_then(|m| m.as_str().chars().next())
}
