//! SelfErase Workers API
//!
//! 公開されているデータブローカー情報を提供し、各ブローカーの
//! オプトアウトページが到達可能かを確認するステートレスなサーバー。
//! 利用者の個人情報は一切扱わない。

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// ブローカーカタログ・テンプレート
pub mod catalog;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// ブローカーヘルスチェック
pub mod health;

/// ロギング初期化ユーティリティ
pub mod logging;

/// ブローカーレジストリ
pub mod registry;

/// サーバー起動・シャットダウン
pub mod server;

use catalog::BrokerCatalog;
use health::{BrokerHealthChecker, BrokerProbe, HttpProbe};
use registry::BrokerRegistry;
use selferase_common::config::WorkerConfig;
use selferase_common::error::WorkerResult;
use std::sync::Arc;
use std::time::Duration;

/// アプリケーション状態
///
/// 起動時に組み立てられ、以降は読み取り専用。
#[derive(Clone)]
pub struct AppState {
    /// ブローカーカタログ
    pub catalog: Arc<BrokerCatalog>,
    /// ヘルスチェッカー
    pub health_checker: BrokerHealthChecker,
}

impl AppState {
    /// カタログとプローブから状態を作成
    pub fn new(catalog: BrokerCatalog, probe: Arc<dyn BrokerProbe>, deadline: Duration) -> Self {
        let registry = BrokerRegistry::from_catalog(&catalog);
        let health_checker = BrokerHealthChecker::new(registry, probe).with_deadline(deadline);
        Self {
            catalog: Arc::new(catalog),
            health_checker,
        }
    }

    /// 設定から状態を作成（カタログ読み込み + HTTPプローブ）
    pub async fn from_config(config: &WorkerConfig) -> WorkerResult<Self> {
        let catalog = BrokerCatalog::load(config.brokers_file.as_deref()).await?;
        let probe = HttpProbe::from_config(config)?;
        Ok(Self::new(catalog, Arc::new(probe), config.probe_timeout()))
    }
}
