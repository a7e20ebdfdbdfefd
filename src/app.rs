//! Command-line workflow: select files, render them all, then emit
//!
//! Every input is rendered before anything is printed or written, so a
//! resolution failure in any file leaves every file on disk untouched.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::config::{OutputMode, RunOptions, is_yaml_file};
use crate::lockfile::registry::ResolverRegistry;
use crate::sync::Syncer;

/// A file after syncing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Path as given on the command line
    pub path: PathBuf,
    pub content: String,
    /// Whether `content` differs from what is on disk
    pub changed: bool,
}

/// Outcome counts of one invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub synced: usize,
    pub changed: usize,
    pub skipped: usize,
}

/// Sync `paths` and emit the results according to `options`.
///
/// Printed output goes to `out`. In check mode the paths that would change
/// are listed on `out` and the run fails if there is at least one.
pub fn run(
    paths: &[PathBuf],
    options: &RunOptions,
    registry: &ResolverRegistry,
    out: &mut dyn Write,
) -> Result<RunSummary> {
    let syncer = Syncer::new(registry).context("Failed to build line patterns")?;

    let mut summary = RunSummary::default();
    let mut rendered = Vec::new();

    for path in paths {
        // Symlinks are judged by their target's extension
        let target = path.canonicalize().unwrap_or_else(|_| path.clone());
        if !is_yaml_file(&target) {
            debug!("Skipping {}: not a YAML file", path.display());
            summary.skipped += 1;
            continue;
        }

        let file = render_file(&syncer, path)?;
        if file.changed {
            summary.changed += 1;
        }
        summary.synced += 1;
        rendered.push(file);
    }

    match options.mode {
        OutputMode::Print => {
            for file in &rendered {
                out.write_all(file.content.as_bytes())
                    .context("Failed to write to stdout")?;
            }
        }
        OutputMode::Write => {
            for file in rendered.iter().filter(|file| file.changed) {
                std::fs::write(&file.path, &file.content)
                    .with_context(|| format!("Failed to write {}", file.path.display()))?;
                info!("Updated {}", file.path.display());
            }
        }
        OutputMode::Check => {
            for file in rendered.iter().filter(|file| file.changed) {
                writeln!(out, "would update {}", file.path.display())
                    .context("Failed to write to stdout")?;
            }
            if summary.changed > 0 {
                bail!("{} file(s) out of sync with their lockfiles", summary.changed);
            }
        }
    }

    Ok(summary)
}

/// Read and sync a single file
pub fn render_file(syncer: &Syncer<'_>, path: &Path) -> Result<RenderedFile> {
    let source = path
        .canonicalize()
        .with_context(|| format!("Failed to resolve {}", path.display()))?;
    let text = std::fs::read_to_string(&source)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let content = syncer.render(&text, &source)?;
    let changed = content != text;
    debug!(
        "Rendered {} ({})",
        path.display(),
        if changed { "changed" } else { "unchanged" }
    );

    Ok(RenderedFile {
        path: path.to_path_buf(),
        content,
        changed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lockfile::create_default_registry;
    use tempfile::TempDir;

    #[test]
    fn run_skips_files_without_yaml_extension() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.txt");
        std::fs::write(&path, "- alpha  # sync:yarn.lock\n").unwrap();
        let registry = create_default_registry();
        let mut out = Vec::new();

        let summary = run(&[path], &RunOptions::default(), &registry, &mut out).unwrap();

        assert_eq!(
            summary,
            RunSummary {
                synced: 0,
                changed: 0,
                skipped: 1,
            }
        );
        assert!(out.is_empty());
    }

    #[test]
    fn run_prints_files_without_directives_unchanged() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yml");
        std::fs::write(&path, "repos:\n  - repo: local\n").unwrap();
        let registry = create_default_registry();
        let mut out = Vec::new();

        let summary = run(&[path], &RunOptions::default(), &registry, &mut out).unwrap();

        assert_eq!(summary.synced, 1);
        assert_eq!(summary.changed, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "repos:\n  - repo: local\n");
    }

    #[test]
    fn run_fails_for_missing_input_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.yaml");
        let registry = create_default_registry();
        let mut out = Vec::new();

        let result = run(&[path], &RunOptions::default(), &registry, &mut out);

        assert!(result.is_err());
    }
}
