//! serve サブコマンド
//!
//! HTTPサーバーを起動します。

use super::ProbeArgs;
use crate::{config, server, AppState};
use clap::Args;
use selferase_common::config::WorkerConfig;
use selferase_common::error::WorkerResult;
use tracing::info;

/// serve サブコマンドの引数
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Listen port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Bind address
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    #[command(flatten)]
    pub probe: ProbeArgs,
}

impl ServeArgs {
    /// 環境変数の設定にCLI引数を重ねる
    pub fn resolve(&self, base: WorkerConfig) -> WorkerConfig {
        let mut config = self.probe.apply(base);
        if let Some(host) = &self.host {
            config.host = host.clone();
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        config
    }
}

/// サーバーを起動し、シャットダウンまで待つ
pub async fn execute(args: &ServeArgs) -> WorkerResult<()> {
    let config = args.resolve(config::load_from_env());
    let state = AppState::from_config(&config).await?;
    info!(
        brokers = state.catalog.len(),
        probe_timeout_ms = config.probe_timeout_ms,
        "Broker catalog loaded"
    );

    server::run(state, &config.bind_addr()).await
}
