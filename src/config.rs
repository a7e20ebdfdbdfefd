use std::ffi::OsStr;
use std::path::Path;

// =============================================================================
// Input selection
// =============================================================================

/// File extensions that are synced; other paths are skipped
pub const YAML_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

// =============================================================================
// Logging
// =============================================================================

/// Environment variable holding a tracing filter (e.g. `pin_sync=debug`)
pub const LOG_ENV_VAR: &str = "PIN_SYNC_LOG";

/// Filter used when neither the environment nor `--verbose` says otherwise
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Filter used with `--verbose`
pub const VERBOSE_LOG_LEVEL: &str = "debug";

/// What to do with rendered files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Print rendered files to stdout
    #[default]
    Print,
    /// Overwrite source files whose content changed
    Write,
    /// Report files that would change and fail if there are any
    Check,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Options for one invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub mode: OutputMode,
}

/// Whether `path` has one of the synced extensions
pub fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| YAML_EXTENSIONS.contains(&ext))
}

/// Returns the tracing filter directive.
/// Uses the value of `PIN_SYNC_LOG` if set and non-empty,
/// otherwise `debug` when verbose, or `warn`.
pub fn log_filter(verbose: bool) -> String {
    log_filter_with_env(std::env::var(LOG_ENV_VAR).ok(), verbose)
}

fn log_filter_with_env(env_filter: Option<String>, verbose: bool) -> String {
    env_filter
        .filter(|filter| !filter.trim().is_empty())
        .unwrap_or_else(|| {
            if verbose {
                VERBOSE_LOG_LEVEL.to_string()
            } else {
                DEFAULT_LOG_LEVEL.to_string()
            }
        })
}
