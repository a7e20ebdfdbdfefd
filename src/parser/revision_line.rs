//! Revision-field line parser
//!
//! Some configuration formats keep the package and its pinned revision in
//! separate fields, so the directive names the package explicitly:
//!
//! ```text
//! - repo: https://github.com/pre-commit/pre-commit-hooks
//!   rev: v4.0.0  # sync:pre-commit-hooks:poetry.lock
//! ```

use regex::Regex;

use crate::parser::traits::{ClassifierError, LineParser};
use crate::parser::types::{LineMatch, RevisionLine, SyncDirective, quote_char};

/// Parser for `rev: <version>  # sync:<package>:<lockfile>` lines
pub struct RevisionLineParser {
    pattern: Regex,
}

impl RevisionLineParser {
    pub fn new() -> Result<Self, ClassifierError> {
        let pattern = Regex::new(concat!(
            r"^(?P<prefix>\s*rev:\s*)",
            r#"(?P<quote>['"]?)"#,
            r"(?P<current>.+?)",
            r#"['"]?"#,
            // The package runs up to the last colon so the lockfile path stays intact
            r"(?P<sync>\s+#\s+sync:(?P<package>.+):(?P<lockfile>.+))$",
        ))?;

        Ok(Self { pattern })
    }
}

impl LineParser for RevisionLineParser {
    fn shape(&self) -> &'static str {
        "revision"
    }

    fn parse_line(&self, line: &str) -> Option<LineMatch> {
        let caps = self.pattern.captures(line)?;

        let package = caps.name("package")?.as_str().trim();
        let lockfile = caps.name("lockfile")?.as_str().trim();
        if package.is_empty() || lockfile.is_empty() {
            return None;
        }

        Some(LineMatch::Revision(RevisionLine {
            prefix: caps.name("prefix")?.as_str().to_string(),
            quote: quote_char(caps.name("quote")),
            current: caps.name("current")?.as_str().to_string(),
            sync_comment: caps.name("sync")?.as_str().to_string(),
            directive: SyncDirective {
                package: package.to_string(),
                lockfile: lockfile.to_string(),
            },
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn revision_line(line: &str) -> RevisionLine {
        let parser = RevisionLineParser::new().unwrap();
        match parser.parse_line(line) {
            Some(LineMatch::Revision(revision)) => revision,
            other => panic!("expected revision line, got {other:?}"),
        }
    }

    #[test]
    fn parse_line_extracts_unquoted_revision() {
        let result = revision_line("  rev: v1.0.0  # sync:pre-commit-hooks:poetry.lock");

        assert_eq!(
            result,
            RevisionLine {
                prefix: "  rev: ".to_string(),
                quote: None,
                current: "v1.0.0".to_string(),
                sync_comment: "  # sync:pre-commit-hooks:poetry.lock".to_string(),
                directive: SyncDirective {
                    package: "pre-commit-hooks".to_string(),
                    lockfile: "poetry.lock".to_string(),
                },
            }
        );
    }

    #[rstest]
    #[case(r#"    rev: "22.3.0"  # sync:black:poetry.lock"#, Some('"'), "22.3.0")]
    #[case("    rev: '22.3.0'  # sync:black:poetry.lock", Some('\''), "22.3.0")]
    #[case("rev:22.3.0 # sync:black:poetry.lock", None, "22.3.0")]
    fn parse_line_records_quote_style(
        #[case] line: &str,
        #[case] quote: Option<char>,
        #[case] current: &str,
    ) {
        let result = revision_line(line);

        assert_eq!(result.quote, quote);
        assert_eq!(result.current, current);
        assert_eq!(result.directive.package, "black");
    }

    #[test]
    fn parse_line_splits_directive_at_last_colon() {
        let result = revision_line("  rev: v2  # sync:@scope/pkg:../frontend/yarn.lock");

        assert_eq!(result.directive.package, "@scope/pkg");
        assert_eq!(result.directive.lockfile, "../frontend/yarn.lock");
    }

    #[rstest]
    #[case("  rev: v1.0.0")]
    #[case("  rev: v1.0.0  # sync:poetry.lock")]
    #[case("  rev: v1.0.0  # sync::poetry.lock")]
    #[case("  rev: v1.0.0  # sync:black:")]
    #[case("  revision: v1.0.0  # sync:black:poetry.lock")]
    #[case("  - rev: v1.0.0  # sync:black:poetry.lock")]
    #[case("  repo: https://example.com  # sync:black:poetry.lock")]
    fn parse_line_returns_none_for_unrecognised_lines(#[case] line: &str) {
        let parser = RevisionLineParser::new().unwrap();
        assert_eq!(parser.parse_line(line), None);
    }
}
