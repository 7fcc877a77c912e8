//! ブローカーカタログ
//!
//! 公開情報のみを扱う静的データ。組み込みJSON、または設定された
//! ファイルから読み込む。プロセス起動時に一度だけ検証される。

pub mod templates;

use reqwest::Url;
use selferase_common::error::{CommonError, WorkerResult};
use selferase_common::types::{Broker, BrokerEndpoint};
use std::collections::HashSet;
use std::path::Path;
use tracing::{info, warn};

/// 組み込みカタログ
const BUILTIN_BROKERS: &str = include_str!("../../data/brokers.json");

/// ブローカーのカテゴリ一覧
pub const CATEGORIES: [&str; 6] = [
    "People Search",
    "Data Broker",
    "Background Check",
    "Public Records",
    "Social Media",
    "Marketing",
];

/// 検証済みブローカーカタログ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerCatalog {
    brokers: Vec<Broker>,
}

impl BrokerCatalog {
    /// ブローカー一覧からカタログを作成（検証付き）
    pub fn new(brokers: Vec<Broker>) -> Result<Self, CommonError> {
        validate(&brokers)?;
        Ok(Self { brokers })
    }

    /// 組み込みカタログを読み込む
    pub fn builtin() -> Result<Self, CommonError> {
        Self::from_json(BUILTIN_BROKERS)
    }

    /// JSON文字列から読み込む
    pub fn from_json(json: &str) -> Result<Self, CommonError> {
        let brokers: Vec<Broker> = serde_json::from_str(json)?;
        Self::new(brokers)
    }

    /// JSONファイルから読み込む
    pub async fn from_file(path: &Path) -> WorkerResult<Self> {
        let json = tokio::fs::read_to_string(path).await?;
        let catalog = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            count = catalog.len(),
            "Loaded broker catalog from file"
        );
        Ok(catalog)
    }

    /// 設定に応じて読み込む（ファイル指定がなければ組み込み）
    pub async fn load(path: Option<&Path>) -> WorkerResult<Self> {
        match path {
            Some(path) => Self::from_file(path).await,
            None => Ok(Self::builtin()?),
        }
    }

    /// 全ブローカー
    pub fn brokers(&self) -> &[Broker] {
        &self.brokers
    }

    /// IDでブローカーを取得
    pub fn get(&self, id: &str) -> Option<&Broker> {
        self.brokers.iter().find(|b| b.id == id)
    }

    /// ヘルスチェック用エンドポイント一覧
    pub fn endpoints(&self) -> impl Iterator<Item = BrokerEndpoint> + '_ {
        self.brokers.iter().map(Broker::endpoint)
    }

    /// 登録数
    pub fn len(&self) -> usize {
        self.brokers.len()
    }

    /// 空かどうか
    pub fn is_empty(&self) -> bool {
        self.brokers.is_empty()
    }
}

fn validate(brokers: &[Broker]) -> Result<(), CommonError> {
    let mut seen = HashSet::with_capacity(brokers.len());

    for broker in brokers {
        if broker.id.trim().is_empty() {
            return Err(CommonError::Validation(
                "broker id must not be empty".to_string(),
            ));
        }
        if !seen.insert(broker.id.as_str()) {
            return Err(CommonError::Validation(format!(
                "duplicate broker id: {}",
                broker.id
            )));
        }

        let url = Url::parse(&broker.opt_out_url).map_err(|e| {
            CommonError::Validation(format!(
                "invalid optOutUrl for {}: {} ({})",
                broker.id, broker.opt_out_url, e
            ))
        })?;
        match url.scheme() {
            "https" => {}
            "http" => warn!(
                broker_id = %broker.id,
                url = %broker.opt_out_url,
                "Broker opt-out URL is not HTTPS"
            ),
            other => {
                return Err(CommonError::Validation(format!(
                    "unsupported scheme '{}' in optOutUrl for {}",
                    other, broker.id
                )))
            }
        }
    }

    Ok(())
}
