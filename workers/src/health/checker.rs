//! ブローカーヘルスチェッカー
//!
//! Registry → Probe → Classifier → Composer の順に1回分のチェックを実行する。
//! リクエスト間で共有する可変状態は持たない。

use super::classifier::{classify, Classification};
use super::composer::compose;
use super::probe::{BrokerProbe, ProbeOutcome};
use crate::registry::BrokerRegistry;
use selferase_common::types::{HealthRecord, HealthStatus};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// プローブのデフォルト締め切り（ミリ秒）
pub const DEFAULT_PROBE_TIMEOUT_MS: u64 = 5000;

/// ブローカーヘルスチェッカー
#[derive(Clone)]
pub struct BrokerHealthChecker {
    /// ブローカーレジストリ
    registry: BrokerRegistry,
    /// プローブ実装
    probe: Arc<dyn BrokerProbe>,
    /// プローブの締め切り
    deadline: Duration,
}

impl BrokerHealthChecker {
    /// 新しいヘルスチェッカーを作成
    pub fn new(registry: BrokerRegistry, probe: Arc<dyn BrokerProbe>) -> Self {
        Self {
            registry,
            probe,
            deadline: Duration::from_millis(DEFAULT_PROBE_TIMEOUT_MS),
        }
    }

    /// 締め切りを設定
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = deadline;
        self
    }

    /// 現在の締め切り
    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// レジストリ
    pub fn registry(&self) -> &BrokerRegistry {
        &self.registry
    }

    /// 単一ブローカーのヘルスチェック
    ///
    /// 未登録IDはプローブせずに `unknown` を返す。失敗は全てレコードに変換される。
    pub async fn check(&self, broker_id: &str) -> HealthRecord {
        let Some(endpoint) = self.registry.resolve(broker_id) else {
            info!(broker_id = %broker_id, "Health check requested for unknown broker");
            return compose(broker_id, Classification::not_found(), None);
        };

        let outcome = self.probe.check(&endpoint.url, self.deadline).await;
        let record = compose(broker_id, classify(&outcome), Some(&endpoint.url));

        match record.status {
            HealthStatus::Healthy => debug!(
                broker_id = %broker_id,
                http_status = ?record.http_status,
                "Health check succeeded"
            ),
            _ => warn!(
                broker_id = %broker_id,
                status = %record.status,
                http_status = ?record.http_status,
                error = ?record.error_detail,
                "Health check reported a problem"
            ),
        }

        record
    }

    /// 複数ブローカーを並列チェック
    ///
    /// 結果は引数の順序で返す。各チェックは互いに独立している。
    pub async fn check_many(&self, broker_ids: &[String]) -> Vec<HealthRecord> {
        let mut handles = Vec::with_capacity(broker_ids.len());

        for broker_id in broker_ids {
            let checker = self.clone();
            let broker_id = broker_id.clone();
            handles.push(tokio::spawn(async move { checker.check(&broker_id).await }));
        }

        let mut records = Vec::with_capacity(handles.len());
        for (handle, broker_id) in handles.into_iter().zip(broker_ids) {
            match handle.await {
                Ok(record) => records.push(record),
                Err(e) => {
                    error!("Task join error: {}", e);
                    let outcome = ProbeOutcome::TransportError(format!(
                        "health check task failed: {}",
                        e
                    ));
                    let url = self
                        .registry
                        .resolve(broker_id)
                        .map(|endpoint| endpoint.url.as_str());
                    records.push(compose(broker_id, classify(&outcome), url));
                }
            }
        }

        records
    }

    /// 登録済みの全ブローカーを並列チェック
    pub async fn check_all(&self) -> Vec<HealthRecord> {
        let ids: Vec<String> = self.registry.ids().into_iter().map(String::from).collect();

        if ids.is_empty() {
            info!("No brokers to check");
            return Vec::new();
        }

        info!(count = ids.len(), "Starting parallel health check for all brokers");
        let records = self.check_many(&ids).await;

        let healthy = records
            .iter()
            .filter(|r| r.status == HealthStatus::Healthy)
            .count();
        info!(
            healthy = healthy,
            unhealthy = records.len() - healthy,
            "Parallel health check completed"
        );

        records
    }
}
