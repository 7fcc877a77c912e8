//! 設定管理
//!
//! WorkerConfig 設定構造体

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Workers設定
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WorkerConfig {
    /// ホストアドレス (デフォルト: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// ポート番号 (デフォルト: 8787)
    #[serde(default = "default_port")]
    pub port: u16,

    /// プローブの締め切り（ミリ秒）(デフォルト: 5000)
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,

    /// プローブ時のUser-Agent
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// リダイレクト追従の上限 (デフォルト: 10)
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,

    /// ブローカーカタログ（JSON）のパス。未指定なら組み込みカタログを使う
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brokers_file: Option<PathBuf>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_probe_timeout_ms() -> u64 {
    5000
}

fn default_user_agent() -> String {
    "SelfErase-HealthCheck/1.0".to_string()
}

fn default_max_redirects() -> usize {
    10
}

impl WorkerConfig {
    /// バインドアドレス
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// プローブの締め切り
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            probe_timeout_ms: default_probe_timeout_ms(),
            user_agent: default_user_agent(),
            max_redirects: default_max_redirects(),
            brokers_file: None,
        }
    }
}
