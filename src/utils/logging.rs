//! Tracing configuration and initialization.
//!
//! Per-file events go to stdout as timestamped lines so a run can be redirected to a
//! log file (`shorten-names /data >> shorten.log 2>&1`) and read back later.

use std::io::IsTerminal;
use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

use crate::core::LOG_ENV_VAR;

const DEFAULT_FILTER: &str = "info";

/// Filter from `SHORTENER_LOG`, then `RUST_LOG`, then `info`
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_logging() -> Result<(), TryInitError> {
    let ansi = std::io::stdout().is_terminal();

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(false)
                .with_ansi(ansi),
        )
        .try_init()
}
