//! poetry.lock reader

use std::path::Path;
use std::str::FromStr;

use pep508_rs::PackageName;
use tracing::warn;

use crate::lockfile::error::ResolveError;
use crate::lockfile::reader::{LockfileReader, read_lockfile_text};
use crate::lockfile::types::LockedPackages;

/// Reader for Poetry `poetry.lock` files
pub struct PoetryLockfileReader;

impl LockfileReader for PoetryLockfileReader {
    fn lockfile_name(&self) -> &'static str {
        "poetry.lock"
    }

    fn comparator(&self) -> &'static str {
        "=="
    }

    fn read(&self, path: &Path) -> Result<LockedPackages, ResolveError> {
        let content = read_lockfile_text(path)?;

        let mut parser = tree_sitter::Parser::new();
        let language = tree_sitter_toml_ng::LANGUAGE;
        parser.set_language(&language.into()).map_err(|e| {
            warn!("Failed to set TOML language for tree-sitter: {}", e);
            ResolveError::parse(path, e.to_string())
        })?;

        let tree = parser.parse(&content, None).ok_or_else(|| {
            warn!("Failed to parse TOML content");
            ResolveError::parse(path, "Failed to parse TOML")
        })?;

        let root = tree.root_node();
        if root.has_error() {
            warn!("poetry.lock at {} contains syntax errors", path.display());
            return Err(ResolveError::parse(path, "Invalid TOML syntax"));
        }

        let mut packages = LockedPackages::with_normalizer(normalize_package_name);
        let mut cursor = root.walk();
        for child in root.children(&mut cursor) {
            if child.kind() == "table_array_element"
                && table_name(child, &content) == Some("package")
                && let Some((name, version)) = extract_name_and_version(child, &content)
                    .map_err(|message| ResolveError::parse(path, message))?
            {
                packages.insert(&name, &version);
            }
        }

        Ok(packages)
    }
}

/// Normalize a Python package name per PEP 503 (`Foo_Bar` → `foo-bar`)
fn normalize_package_name(name: &str) -> String {
    PackageName::from_str(name)
        .map(|normalized| normalized.to_string())
        .unwrap_or_else(|_| name.to_lowercase().replace(['_', '.'], "-"))
}

/// Header key of a `[[...]]` table
fn table_name<'a>(table_node: tree_sitter::Node, content: &'a str) -> Option<&'a str> {
    let mut cursor = table_node.walk();
    table_node
        .children(&mut cursor)
        .find(|child| matches!(child.kind(), "bare_key" | "dotted_key" | "quoted_key"))
        .map(|key| &content[key.byte_range()])
}

/// Extract `name` and `version` from the pairs of one `[[package]]` table.
///
/// A key defined twice in the same table is an error.
fn extract_name_and_version(
    table_node: tree_sitter::Node,
    content: &str,
) -> Result<Option<(String, String)>, String> {
    let mut name: Option<String> = None;
    let mut version: Option<String> = None;

    let mut cursor = table_node.walk();
    for pair in table_node.children(&mut cursor) {
        if pair.kind() != "pair" {
            continue;
        }

        let (Some(key_node), Some(value_node)) = (pair.named_child(0), pair.named_child(1)) else {
            continue;
        };

        if value_node.kind() != "string" {
            continue;
        }

        let key = &content[key_node.byte_range()];
        let slot = match key {
            "name" => &mut name,
            "version" => &mut version,
            _ => continue,
        };
        if slot.is_some() {
            return Err(format!(
                "Duplicate key '{}' in [[package]] at line {}",
                key,
                pair.start_position().row + 1
            ));
        }
        *slot = Some(unquote(&content[value_node.byte_range()]));
    }

    Ok(name.zip(version))
}

fn unquote(text: &str) -> String {
    text.trim().trim_matches(|c| c == '"' || c == '\'').to_string()
}
