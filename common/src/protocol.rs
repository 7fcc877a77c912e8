//! 通信プロトコル定義
//!
//! Workers API のレスポンス型

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// エラーレスポンス
///
/// ```json
/// { "error": "Broker ID required" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// 外部向けメッセージ
    pub error: String,
}

impl ErrorResponse {
    /// メッセージからレスポンスを作成
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// ルート（`/`, `/api`）のAPI情報
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiInfo {
    /// API名
    pub name: String,
    /// バージョン
    pub version: String,
    /// 説明
    pub description: String,
    /// プライバシー方針
    pub privacy: String,
    /// エンドポイント一覧（キー順で安定）
    pub endpoints: BTreeMap<String, String>,
    /// ドキュメントURL
    pub documentation: String,
}

impl ApiInfo {
    /// 指定バージョンのAPI情報を作成
    pub fn new(version: impl Into<String>) -> Self {
        let endpoints = [
            ("brokers", "/api/brokers"),
            ("broker_detail", "/api/brokers/:id"),
            ("health_check", "/health-check/:id"),
            ("health_check_legacy", "/api/health/:id"),
            ("template", "/api/templates/:id"),
            ("categories", "/api/categories"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            name: "SelfErase Workers API".to_string(),
            version: version.into(),
            description: "Stateless edge functions for public broker data".to_string(),
            privacy: "NO USER PII IS PROCESSED OR STORED".to_string(),
            endpoints,
            documentation: "https://github.com/OWASP-BLT/SelfErase".to_string(),
        }
    }
}
