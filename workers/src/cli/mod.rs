//! CLI module for selferase-workers
//!
//! サーバー起動と、ターミナルからのヘルスチェック・カタログ表示を提供する。

pub mod brokers;
pub mod check;
pub mod serve;

use clap::{Args, Parser, Subcommand};
use selferase_common::config::WorkerConfig;
use std::path::PathBuf;

/// SelfErase workers - broker catalog and opt-out page health checks
#[derive(Parser, Debug)]
#[command(name = "selferase-workers")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    SELFERASE_HOST              Bind address (default: 0.0.0.0)
    SELFERASE_PORT              Listen port (default: 8787)
    SELFERASE_PROBE_TIMEOUT_MS  Probe deadline in milliseconds (default: 5000)
    SELFERASE_USER_AGENT        User-Agent sent with probes
    SELFERASE_BROKERS_FILE      Broker catalog JSON (default: built-in)
    SELFERASE_LOG               Log filter directives
    SELFERASE_LOG_LEVEL         Log level (default: info)
"#)]
pub struct Cli {
    /// Subcommand to execute (default: serve)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Check broker opt-out pages and print one JSON record per line
    Check(check::CheckArgs),
    /// List catalog brokers
    Brokers(brokers::BrokersArgs),
}

/// カタログ・プローブ関連の共通オプション
#[derive(Args, Debug, Clone, Default)]
pub struct ProbeArgs {
    /// Probe deadline in milliseconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub probe_timeout_ms: Option<u64>,

    /// Broker catalog JSON file
    #[arg(long)]
    pub brokers_file: Option<PathBuf>,
}

impl ProbeArgs {
    /// 指定されたオプションで設定を上書きする
    pub fn apply(&self, mut config: WorkerConfig) -> WorkerConfig {
        if let Some(ms) = self.probe_timeout_ms {
            config.probe_timeout_ms = ms;
        }
        if let Some(path) = &self.brokers_file {
            config.brokers_file = Some(path.clone());
        }
        config
    }
}
