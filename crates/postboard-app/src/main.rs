//! Postboard - desktop message board client.
//!
//! Opens the local database, applies the configuration, and runs the
//! window with the navigation sidebar.

use std::panic;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use directories::ProjectDirs;
use postboard_core::AppConfig;
use postboard_storage::Database;
use postboard_ui::{run_app, AppServices};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Postboard - desktop message board client
#[derive(Parser, Debug)]
#[command(name = "postboard", version, about)]
struct Args {
    /// Path to a JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the SQLite database (overrides the config file)
    #[arg(long)]
    database: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Get the logs directory path.
fn logs_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "postboard", "postboard").map(|dirs| dirs.data_dir().join("logs"))
}

/// Builds the default filter directive for `args`.
fn filter_directive(args: &Args) -> String {
    let log_level = if args.debug { "debug" } else { &args.log_level };
    format!("postboard={log_level},warn")
}

/// Initialize logging with file rotation.
fn init_logging(args: &Args) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(args)));

    if let Some(log_dir) = logs_dir() {
        if std::fs::create_dir_all(&log_dir).is_ok() {
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .max_log_files(5)
                .filename_prefix("postboard")
                .filename_suffix("log")
                .build(&log_dir)
                .ok();

            if let Some(appender) = file_appender {
                let (non_blocking, guard) = tracing_appender::non_blocking(appender);

                if args.debug {
                    tracing_subscriber::registry()
                        .with(env_filter)
                        .with(fmt::layer().with_writer(std::io::stdout))
                        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
                        .init();
                } else {
                    tracing_subscriber::registry()
                        .with(env_filter)
                        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
                        .init();
                }

                tracing::info!("Logging to {:?}", log_dir);
                return Some(guard);
            }
        }
    }

    // Fallback: console logging only
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::warn!("File logging unavailable, using console only");
    None
}

/// Picks the database path: command line, then config, then the default.
fn resolve_database_path(args: &Args, config: &AppConfig) -> Option<PathBuf> {
    args.database
        .clone()
        .or_else(|| config.database_path.clone())
}

/// Opens the database at `path`, or at the default location.
fn open_database(path: Option<&Path>) -> anyhow::Result<Database> {
    let db = match path {
        Some(path) => Database::with_path(path),
        None => Database::new(),
    }
    .context("Failed to open database")?;

    Ok(db)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Keep the guard alive for the duration of the program
    let _log_guard = init_logging(&args);

    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        tracing::error!("PANIC: {}", panic_info);
        default_hook(panic_info);
    }));

    tracing::info!("Starting Postboard...");
    tracing::debug!("Args: {:?}", args);

    let config = AppConfig::load(args.config.as_deref()).context("Failed to load config")?;
    let db_path = resolve_database_path(&args, &config);
    let db = open_database(db_path.as_deref())?;

    let services = AppServices::from_database(db, &config)?;
    run_app(services);

    tracing::info!("Postboard exited");
    Ok(())
}
