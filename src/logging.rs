use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE: &str = "cocode.log";
pub const LOG_ENV: &str = "COCODE_LOG";
pub const DEFAULT_FILTER: &str = "cocode=debug,warn";

/// Installs the global subscriber. Logs always go to `<dir>/cocode.log`;
/// `stderr` adds a terminal layer, which must stay off while the TUI owns the
/// screen. Keep the returned guard alive until exit or buffered lines are lost.
pub fn init(dir: &Path, stderr: bool) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| DEFAULT_FILTER.into());
    let stderr_layer = stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .with(stderr_layer)
        .try_init()
        .context("install tracing subscriber")?;

    tracing::debug!(dir = %dir.display(), "logging to {}", LOG_FILE);
    Ok(guard)
}
