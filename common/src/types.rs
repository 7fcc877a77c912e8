//! 共通型定義
//!
//! Broker, BrokerEndpoint, HealthRecord等のコアデータ型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// オプトアウト手段の種別
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OptOutMethodType {
    /// Webフォームから申請
    OnlineForm,
    /// メールで申請
    Email,
    /// 電話で申請
    Phone,
    /// 郵送で申請
    Mail,
}

/// オプトアウト手順
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OptOutMethod {
    /// 手段の種別
    #[serde(rename = "type")]
    pub method_type: OptOutMethodType,
    /// 申請に使うテンプレートID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    /// 手順の概要
    pub instructions: String,
    /// 手順の詳細
    #[serde(default)]
    pub steps: Vec<String>,
}

/// データブローカー（公開情報のみ）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Broker {
    /// 一意識別子
    pub id: String,
    /// 表示名
    pub name: String,
    /// 説明
    pub description: String,
    /// トップページURL
    pub website: String,
    /// オプトアウトページURL（ヘルスチェック対象）
    pub opt_out_url: String,
    /// カテゴリ
    pub category: String,
    /// 保持しているデータの種類
    #[serde(default)]
    pub data_types: Vec<String>,
    /// オプトアウト手順
    pub opt_out_method: OptOutMethod,
    /// オプトアウト窓口のメールアドレス
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,
    /// 申請時に必要な項目
    #[serde(default)]
    pub required_fields: Vec<String>,
    /// 対応までの目安日数
    pub estimated_response_days: u32,
    /// 掲載中かどうか
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Broker {
    /// ヘルスチェック用のエンドポイントに変換
    pub fn endpoint(&self) -> BrokerEndpoint {
        BrokerEndpoint {
            id: self.id.clone(),
            url: self.opt_out_url.clone(),
        }
    }
}

/// ブローカーIDと正規のプローブ先URLの組
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BrokerEndpoint {
    /// ブローカーID
    pub id: String,
    /// プローブ先URL
    pub url: String,
}

/// ヘルス状態
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    /// 2xx/3xx 応答あり
    Healthy,
    /// 応答はあるが 2xx/3xx 以外
    Degraded,
    /// タイムアウトまたは通信エラー
    Error,
    /// 未登録のブローカー
    Unknown,
}

impl HealthStatus {
    /// 文字列表現
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "healthy",
            HealthStatus::Degraded => "degraded",
            HealthStatus::Error => "error",
            HealthStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ヘルスチェック結果
///
/// リクエストごとに生成され、シリアライズ後に破棄される。
/// `httpStatus` は応答を受信した場合のみ、`errorDetail` は `error` の場合のみ、
/// `url` は `unknown` 以外の場合のみ含まれる。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecord {
    /// ブローカーID
    pub broker_id: String,
    /// ヘルス状態
    pub status: HealthStatus,
    /// HTTPステータスコード
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    /// プローブ先URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// 概要メッセージ
    pub message: String,
    /// エラー詳細
    #[serde(default, alias = "error", skip_serializing_if = "Option::is_none")]
    pub error_detail: Option<String>,
    /// チェック完了時刻
    pub checked_at: DateTime<Utc>,
}
