use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pin_sync::app;
use pin_sync::config::{self, LogFormat, OutputMode, RunOptions};
use pin_sync::lockfile::create_default_registry;

#[derive(Parser)]
#[command(name = "pin-sync")]
#[command(
    version,
    about = "Sync version pins in YAML comments from package manager lockfiles"
)]
struct Cli {
    /// YAML files to sync; other files are skipped
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,

    /// Write results back instead of printing them
    #[arg(short, long, conflicts_with = "check")]
    write: bool,

    /// Fail if any file is out of sync, without writing
    #[arg(long)]
    check: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

impl Cli {
    fn mode(&self) -> OutputMode {
        if self.write {
            OutputMode::Write
        } else if self.check {
            OutputMode::Check
        } else {
            OutputMode::Print
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_format);

    let options = RunOptions { mode: cli.mode() };
    let registry = create_default_registry();
    let stdout = std::io::stdout();
    let summary = app::run(&cli.paths, &options, &registry, &mut stdout.lock())?;

    info!(
        "Synced {} file(s), {} changed, {} skipped",
        summary.synced, summary.changed, summary.skipped
    );

    Ok(())
}

/// Logs go to stderr; stdout carries rendered files in print mode
fn init_tracing(verbose: bool, format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config::log_filter(verbose)))
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
