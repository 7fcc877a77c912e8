//! Configuration management via environment variables
//!
//! All variables use the `SELFERASE_` prefix. Unset or unparsable values
//! fall back to `WorkerConfig::default()`.

use selferase_common::config::WorkerConfig;
use std::path::PathBuf;

/// Bind address
pub const HOST_ENV: &str = "SELFERASE_HOST";
/// Listen port
pub const PORT_ENV: &str = "SELFERASE_PORT";
/// Probe deadline in milliseconds
pub const PROBE_TIMEOUT_ENV: &str = "SELFERASE_PROBE_TIMEOUT_MS";
/// Probe User-Agent
pub const USER_AGENT_ENV: &str = "SELFERASE_USER_AGENT";
/// Broker catalog path
pub const BROKERS_FILE_ENV: &str = "SELFERASE_BROKERS_FILE";

/// Get an environment variable, treating empty values as unset
///
/// # Example
/// ```
/// use selferase_workers::config::get_env;
///
/// let port = get_env("SELFERASE_PORT");
/// ```
pub fn get_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value
pub fn get_env_or(name: &str, default: &str) -> String {
    get_env(name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable, parsing to a specific type
///
/// Returns `default` if the variable is unset. An unparsable value logs a
/// warning and also returns `default`.
pub fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    match get_env(name) {
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("Environment variable '{}' has invalid value '{}'", name, raw);
                default
            }
        },
        None => default,
    }
}

/// 環境変数から `WorkerConfig` を組み立てる
///
/// 未設定の項目は `WorkerConfig::default()` の値を使う。
/// 0ミリ秒の締め切りは受け付けず、デフォルトに戻す。
pub fn load_from_env() -> WorkerConfig {
    let defaults = WorkerConfig::default();

    let host = get_env_or(HOST_ENV, &defaults.host);
    let port = get_env_parse(PORT_ENV, defaults.port);
    let mut probe_timeout_ms = get_env_parse(PROBE_TIMEOUT_ENV, defaults.probe_timeout_ms);
    if probe_timeout_ms == 0 {
        tracing::warn!(
            "{} must be greater than 0, using {}",
            PROBE_TIMEOUT_ENV,
            defaults.probe_timeout_ms
        );
        probe_timeout_ms = defaults.probe_timeout_ms;
    }
    let user_agent = get_env_or(USER_AGENT_ENV, &defaults.user_agent);
    let brokers_file = get_env(BROKERS_FILE_ENV).map(PathBuf::from);

    WorkerConfig {
        host,
        port,
        probe_timeout_ms,
        user_agent,
        max_redirects: defaults.max_redirects,
        brokers_file,
    }
}
