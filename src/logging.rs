//! File logging.
//!
//! The terminal is in raw mode while playing, so logs never go to stdout or
//! stderr. When a log directory is configured, events are written to a daily
//! rolling file through a non-blocking writer.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, EnvFilter};

/// File name prefix inside the log directory.
pub const LOG_FILE_PREFIX: &str = "token-tetris.log";

/// Install the global subscriber.
///
/// Returns `None` (and installs nothing) without a directory. The returned
/// guard must be held until exit so buffered lines are flushed.
pub fn init(dir: Option<&Path>, filter: &str) -> Result<Option<WorkerGuard>> {
    let Some(dir) = dir else {
        return Ok(None);
    };

    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating log directory {}", dir.display()))?;

    let filter = EnvFilter::try_new(filter)
        .with_context(|| format!("invalid log filter {filter:?}"))?;

    let appender = rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))?;

    Ok(Some(guard))
}
