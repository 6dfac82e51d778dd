//! sayhi CLI - client for the sayhi SMS template backend

mod commands;
mod logging;
mod notify;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use commands::Commands;
use notify::ConsoleNotifier;
use sayhi_core::{FileStore, Settings, StateDir};
use sayhi_frontend::{Session, SessionOptions};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{Level, error, info};

#[derive(Parser)]
#[command(name = "sayhi")]
#[command(about = "Generate SMS messages from templates")]
#[command(version)]
struct Cli {
    /// Set logging level
    #[arg(short = 'l', long, global = true, default_value = "warn")]
    log_level: LogLevel,

    /// State directory for the stored session and logs
    #[arg(long, global = true, env = "SAYHI_STATE_DIR")]
    state_dir: Option<PathBuf>,

    /// Settings file, applied over sayhi.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend origin, overrides the settings
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds, overrides the settings
    #[arg(short = 't', long, global = true)]
    timeout: Option<u64>,

    /// Disable file logging (only log to stderr)
    #[arg(long, global = true)]
    no_file_log: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => {
            info!("Command completed successfully");
        }
        Err(e) => {
            // Logging may not be up yet when settings or the log file fail
            if tracing::dispatcher::has_been_set() {
                error!("Command failed: {e}");
            } else {
                eprintln!("error: {e}");
            }
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let state_dir = StateDir::resolve(cli.state_dir.or(settings.state_dir));

    let log_file = (!cli.no_file_log).then(|| state_dir.log_path("cli"));
    logging::init_logging(cli.log_level.into(), log_file.as_deref())?;

    let timeout = cli
        .timeout
        .map_or_else(|| settings.api.timeout(), Duration::from_secs);
    let options = SessionOptions {
        base_url: cli.base_url.unwrap_or(settings.api.base_url),
        timeout,
    };
    info!(base_url = %options.base_url, "Starting sayhi CLI");

    let storage = Arc::new(FileStore::open(state_dir.storage_path())?);
    let session = Session::open(&options, storage, Arc::new(ConsoleNotifier))?;

    cli.command.execute(&session).await
}

#[derive(Clone, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(log_level: LogLevel) -> Self {
        match log_level {
            LogLevel::Error => Self::ERROR,
            LogLevel::Warn => Self::WARN,
            LogLevel::Info => Self::INFO,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Trace => Self::TRACE,
        }
    }
}
