//! Rebuild a matched line around a freshly resolved version

use crate::lockfile::types::Resolution;
use crate::parser::types::{LineMatch, PackageLine, RevisionLine};

/// Quote used for package lines that had none
pub const DEFAULT_PACKAGE_QUOTE: char = '"';

/// Produce the replacement for a matched line.
///
/// Only the version field changes; prefix, quoting and the sync comment are
/// reproduced exactly as matched.
pub fn reconstruct(line: &LineMatch, resolution: &Resolution) -> String {
    match line {
        LineMatch::Package(package) => reconstruct_package(package, resolution),
        LineMatch::Revision(revision) => reconstruct_revision(revision, &resolution.version),
    }
}

fn reconstruct_package(line: &PackageLine, resolution: &Resolution) -> String {
    let quote = line.quote.unwrap_or(DEFAULT_PACKAGE_QUOTE);
    format!(
        "{prefix}{quote}{package}{comparator}{version}{quote}{sync}",
        prefix = line.prefix,
        package = line.directive.package,
        comparator = resolution.comparator,
        version = resolution.version,
        sync = line.sync_comment,
    )
}

fn reconstruct_revision(line: &RevisionLine, version: &str) -> String {
    let quote = line.quote.map(String::from).unwrap_or_default();
    format!(
        "{prefix}{quote}{version}{quote}{sync}",
        prefix = line.prefix,
        sync = line.sync_comment,
    )
}
