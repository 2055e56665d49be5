use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::ConnectConfig;

const DEFAULT_FILTER: &str =
    "info,seqdemo_app=debug,seqdemo_ui=debug,seqdemo_connect=debug,seqdemo_chain=debug";

/// Rolled daily as `seqdemo.YYYY-MM-DD`.
const LOG_FILE_PREFIX: &str = "seqdemo";

/// Daily-rolling non-blocking writer under `logs_dir`, created if missing.
fn file_writer(logs_dir: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(logs_dir)
        .with_context(|| format!("Failed to create log directory: {}", logs_dir.display()))?;
    let appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
    Ok(tracing_appender::non_blocking(appender))
}

/// `RUST_LOG` wins over the built-in filter.
fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// File log under `~/.seqdemo/logs` plus a compact console layer. Keep the
/// returned guard alive for the life of the process or buffered lines are
/// lost.
pub fn init_logging() -> Result<WorkerGuard> {
    let (writer, guard) = file_writer(&ConnectConfig::logs_dir()?)?;

    tracing_subscriber::registry()
        .with(env_filter(DEFAULT_FILTER))
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer),
        )
        .with(fmt::layer().with_target(false).compact())
        .init();

    Ok(guard)
}

/// File-only logging into `logs_dir`. Fails instead of panicking when a
/// global subscriber is already installed.
pub fn init_logging_to_dir(logs_dir: &Path, filter: &str) -> Result<WorkerGuard> {
    let (writer, guard) = file_writer(logs_dir)?;

    tracing_subscriber::registry()
        .with(env_filter(filter))
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))?;

    Ok(guard)
}
