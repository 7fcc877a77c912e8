//! ブローカーレジストリ
//!
//! ブローカーIDから正規のプローブ先URLを解決する。起動後は変更されない。

use crate::catalog::BrokerCatalog;
use selferase_common::types::BrokerEndpoint;
use std::collections::HashMap;
use std::sync::Arc;

/// ブローカーレジストリ
///
/// 読み取り専用のためロック不要。クローンは `Arc` の複製のみ。
#[derive(Clone, Debug, Default)]
pub struct BrokerRegistry {
    endpoints: Arc<HashMap<String, BrokerEndpoint>>,
}

impl BrokerRegistry {
    /// エンドポイント一覧から作成
    ///
    /// 同じIDが複数ある場合は後勝ち。
    pub fn new(endpoints: impl IntoIterator<Item = BrokerEndpoint>) -> Self {
        let endpoints = endpoints
            .into_iter()
            .map(|endpoint| (endpoint.id.clone(), endpoint))
            .collect();
        Self {
            endpoints: Arc::new(endpoints),
        }
    }

    /// カタログから作成
    pub fn from_catalog(catalog: &BrokerCatalog) -> Self {
        Self::new(catalog.endpoints())
    }

    /// IDを解決（未登録なら `None`）
    pub fn resolve(&self, broker_id: &str) -> Option<&BrokerEndpoint> {
        self.endpoints.get(broker_id)
    }

    /// 登録済みID一覧（ソート済み）
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.endpoints.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    /// 登録数
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// 空かどうか
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}
