//! Package-declaration line parser
//!
//! Recognises sequence items whose payload is a package, optionally pinned
//! with a comparator and version, followed by a lockfile directive.
//!
//! Format examples:
//! - `  - "prettier@2.8.0"  # sync:yarn.lock`
//! - `  - 'flake8-bugbear==23.1.0'  # sync:poetry.lock`
//! - `  - typescript  # sync:../yarn.lock`

use regex::Regex;

use crate::parser::traits::{ClassifierError, LineParser};
use crate::parser::types::{LineMatch, PackageLine, SyncDirective, quote_char};

/// Parser for `- <package>[<comparator><version>]  # sync:<lockfile>` lines
pub struct PackageLineParser {
    /// Whole-line pattern; the comparator alternation is built from the registry
    pattern: Regex,
}

impl PackageLineParser {
    /// Build the parser for the given comparator tokens (e.g. `@`, `==`)
    pub fn new(comparators: &[&str]) -> Result<Self, ClassifierError> {
        if comparators.is_empty() {
            return Err(ClassifierError::NoComparators);
        }

        // Longest first so `==` is never shadowed by a shorter token
        let mut tokens = comparators.to_vec();
        tokens.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        tokens.dedup();
        let alternation = tokens
            .iter()
            .map(|token| regex::escape(token))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = Regex::new(&format!(
            concat!(
                r"^(?P<prefix>\s*-\s*)",
                r#"(?P<quote>['"]?)"#,
                r"(?P<package>.+?)",
                r"(?P<pinned>(?:{}).+?)?",
                r#"['"]?"#,
                r"(?P<sync>\s+#\s+sync:(?P<lockfile>.+))$",
            ),
            alternation
        ))?;

        Ok(Self { pattern })
    }
}

impl LineParser for PackageLineParser {
    fn shape(&self) -> &'static str {
        "package"
    }

    fn parse_line(&self, line: &str) -> Option<LineMatch> {
        let caps = self.pattern.captures(line)?;

        let package = caps.name("package")?.as_str();
        let lockfile = caps.name("lockfile")?.as_str().trim();
        if is_blank_package(package) || lockfile.is_empty() {
            return None;
        }

        Some(LineMatch::Package(PackageLine {
            prefix: caps.name("prefix")?.as_str().to_string(),
            quote: quote_char(caps.name("quote")),
            pinned: caps.name("pinned").map(|m| m.as_str().to_string()),
            sync_comment: caps.name("sync")?.as_str().to_string(),
            directive: SyncDirective {
                package: package.to_string(),
                lockfile: lockfile.to_string(),
            },
        }))
    }
}

/// A package made only of whitespace and quotes names nothing
fn is_blank_package(package: &str) -> bool {
    package
        .chars()
        .all(|c| c.is_whitespace() || c == '"' || c == '\'')
}
