//! Line classification layer
//! - traits.rs: LineParser trait definition
//! - types.rs: Common types (SyncDirective, LineMatch)
//! - package_line.rs: `- package@version  # sync:lockfile` lines
//! - revision_line.rs: `rev: version  # sync:package:lockfile` lines

pub mod package_line;
pub mod revision_line;
pub mod traits;
pub mod types;

pub use package_line::PackageLineParser;
pub use revision_line::RevisionLineParser;
pub use traits::{ClassifierError, LineParser};
pub use types::{LineMatch, PackageLine, RevisionLine, SyncDirective};

use tracing::trace;

/// Ordered set of line parsers; the first parser that matches wins.
///
/// Package lines are tried before revision lines.
pub struct LineClassifier {
    parsers: Vec<Box<dyn LineParser>>,
}

impl LineClassifier {
    /// Build the default classifier for the given comparator tokens
    pub fn new(comparators: &[&str]) -> Result<Self, ClassifierError> {
        Ok(Self::with_parsers(vec![
            Box::new(PackageLineParser::new(comparators)?),
            Box::new(RevisionLineParser::new()?),
        ]))
    }

    pub fn with_parsers(parsers: Vec<Box<dyn LineParser>>) -> Self {
        Self { parsers }
    }

    pub fn classify(&self, line: &str) -> Option<LineMatch> {
        for parser in &self.parsers {
            if let Some(found) = parser.parse_line(line) {
                trace!(shape = parser.shape(), "Line carries a sync directive");
                return Some(found);
            }
        }
        None
    }
}
