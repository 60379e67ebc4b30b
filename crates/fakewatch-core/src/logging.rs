//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/fakewatch/logs/` (platform data dir).
/// Log level is controlled by the `FAKEWATCH_LOG` environment variable.
///
/// Logging must never write to the terminal itself; the TUI owns stdout.
///
/// # Examples
/// ```bash
/// FAKEWATCH_LOG=debug cargo run
/// FAKEWATCH_LOG=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "fakewatch.log");

    // Default to info, allow override via FAKEWATCH_LOG
    let env_filter = EnvFilter::try_from_env("FAKEWATCH_LOG")
        .unwrap_or_else(|_| EnvFilter::new("fakewatch=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("fakewatch starting");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("fakewatch").join("logs")
}
