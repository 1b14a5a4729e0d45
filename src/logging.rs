//! Logging configuration with journald support on Linux.
//!
//! The store only emits `debug`/`trace` events, so nothing it absorbs shows
//! up unless the configured level asks for it.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Initialize the logging system.
///
/// On Linux, this will attempt to connect to systemd-journald.
/// If unavailable or on other platforms, logs go to a daily file in
/// `config.dir`, or the local data directory when unset.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let env_filter = build_filter(&config.level)?;

    #[cfg(target_os = "linux")]
    {
        if let Ok(journald_layer) = tracing_journald::layer() {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(journald_layer)
                .try_init()
                .context("Logging already initialized")?;

            tracing::info!("Logging initialized with journald backend");
            return Ok(());
        }
    }

    let log_dir = config.dir.clone().unwrap_or_else(default_log_dir);

    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "portfolio.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Kept for the life of the process so buffered lines are flushed
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .try_init()
        .context("Logging already initialized")?;

    tracing::info!("Logging initialized with file backend at {:?}", log_dir);
    Ok(())
}

fn build_filter(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).with_context(|| format!("Invalid log level {:?}", level))
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("portfolio")
        .join("logs")
}
