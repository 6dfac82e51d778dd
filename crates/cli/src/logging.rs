use anyhow::Result;
use std::fs::{File, OpenOptions};
use std::path::Path;
use tracing::Level;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging for the CLI
///
/// Console output goes to stderr so command results on stdout stay clean.
/// With a `log_file`, the same events are also written there without colour.
pub fn init_logging(log_level: Level, log_file: Option<&Path>) -> Result<()> {
    let env_filter = default_filter(log_level);

    match log_file {
        Some(path) => init_file_logging(env_filter, path),
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
            Ok(())
        }
    }
}

fn default_filter(level: Level) -> EnvFilter {
    let level_str = level.as_str().to_lowercase();
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!(
            "sayhi={level_str},sayhi_core={level_str},sayhi_http={level_str},sayhi_frontend={level_str}"
        )
        .into()
    })
}

/// Open the log file for this run, dropping the previous run's log
fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
}

fn init_file_logging(env_filter: EnvFilter, path: &Path) -> Result<()> {
    let log_file = open_log_file(path)?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(log_file)
                .with_ansi(false),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true),
        )
        .init();

    Ok(())
}
