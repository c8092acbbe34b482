//! CLI entry point for the bikeshare explorer.
//!
//! Runs an interactive session on stdin/stdout. Logs go to stderr and to a
//! daily-rolling JSON file.

use anyhow::Result;
use bikeshare_explorer::config::Settings;
use bikeshare_explorer::prompt::Console;
use bikeshare_explorer::session::Session;
use clap::Parser;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "bikeshare_explorer")]
#[command(about = "Explore US bikeshare trip data interactively", long_about = None)]
struct Cli {
    /// Directory containing the city CSV files
    #[arg(long, env = "BIKESHARE_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// JSON file listing cities and their CSV files, replacing the built-in list
    #[arg(long, env = "BIKESHARE_CATALOG")]
    catalog: Option<PathBuf>,
}

/// Colored stderr layer plus a JSON rolling log file. The returned guard must
/// live until exit so buffered file logs are flushed.
fn init_logging() -> Result<WorkerGuard> {
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/bikeshare_explorer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("bikeshare_explorer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    // stdout carries the interactive session, so stderr stays quiet by default
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("warn".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    Ok(file_guard)
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    let _file_guard = init_logging()?;
    let cli = Cli::parse();

    let settings = Settings::resolve(cli.data_dir, cli.catalog.as_deref())?;
    info!(
        data_dir = %settings.data_dir.display(),
        cities = settings.catalog.len(),
        "Starting session"
    );

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    Session::new(Console::new(stdin, stdout), &settings).run()
}
