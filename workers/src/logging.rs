//! Tracing initialization
//!
//! Filter resolution order:
//! 1. `SELFERASE_LOG` (full directive syntax, e.g. `selferase_workers=debug,tower_http=info`)
//! 2. `SELFERASE_LOG_LEVEL` (a bare level such as `debug`)
//! 3. `info`

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Directive env var
pub const LOG_ENV: &str = "SELFERASE_LOG";

/// Level env var
pub const LOG_LEVEL_ENV: &str = "SELFERASE_LOG_LEVEL";

const DEFAULT_LEVEL: &str = "info";

/// Build the env filter without installing it.
pub fn build_filter() -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return filter;
    }
    let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| DEFAULT_LEVEL.to_string());
    EnvFilter::try_new(&level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Install the global subscriber.
///
/// Output goes to stderr so `check` can keep stdout for JSON lines.
/// Returns an error if a global subscriber is already set.
pub fn init() -> Result<(), tracing_subscriber::util::TryInitError> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(build_filter())
        .try_init()
}
