//! Line parser trait definition

use crate::parser::types::LineMatch;

/// Trait for recognising one shape of annotated line
pub trait LineParser: Send + Sync {
    /// Short name of the line shape, used in logs
    fn shape(&self) -> &'static str;

    /// Parse a single line (without its newline).
    ///
    /// Returns `None` when the line does not have this shape or carries no
    /// well-formed `# sync:` directive.
    fn parse_line(&self, line: &str) -> Option<LineMatch>;
}

/// Error type for building line parsers
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// A line pattern failed to compile
    #[error("Invalid line pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// No comparator was supplied for the package line pattern
    #[error("At least one comparator is required")]
    NoComparators,
}
