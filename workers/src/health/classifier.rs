//! プローブ結果の分類
//!
//! 状態を持たない純粋関数。全ての `ProbeOutcome` がちょうど1つの分類に対応する。

use super::probe::ProbeOutcome;
use selferase_common::types::HealthStatus;

const MESSAGE_ACCESSIBLE: &str = "Broker site is accessible";
const MESSAGE_ISSUES: &str = "Broker site may be experiencing issues";
const MESSAGE_FAILED: &str = "Failed to check broker health";
const MESSAGE_NOT_FOUND: &str = "Broker not found";

/// 分類結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    /// ヘルス状態
    pub status: HealthStatus,
    /// 受信したHTTPステータス
    pub http_status: Option<u16>,
    /// 概要メッセージ
    pub message: String,
    /// エラー詳細（`Error` のときのみ）
    pub error_detail: Option<String>,
}

impl Classification {
    /// 未登録ブローカー用の分類（プローブは行わない）
    pub fn not_found() -> Self {
        Self {
            status: HealthStatus::Unknown,
            http_status: None,
            message: MESSAGE_NOT_FOUND.to_string(),
            error_detail: None,
        }
    }

    fn failed(detail: String) -> Self {
        Self {
            status: HealthStatus::Error,
            http_status: None,
            message: MESSAGE_FAILED.to_string(),
            error_detail: Some(detail),
        }
    }
}

/// 2xx/3xx を正常とみなす
pub fn is_healthy_code(code: u16) -> bool {
    (200..400).contains(&code)
}

/// プローブ結果を分類
pub fn classify(outcome: &ProbeOutcome) -> Classification {
    match outcome {
        ProbeOutcome::Responded(code) if is_healthy_code(*code) => Classification {
            status: HealthStatus::Healthy,
            http_status: Some(*code),
            message: MESSAGE_ACCESSIBLE.to_string(),
            error_detail: None,
        },
        ProbeOutcome::Responded(code) => Classification {
            status: HealthStatus::Degraded,
            http_status: Some(*code),
            message: MESSAGE_ISSUES.to_string(),
            error_detail: None,
        },
        ProbeOutcome::TimedOut(after) => Classification::failed(format!(
            "timed out after {} ms",
            after.as_millis()
        )),
        ProbeOutcome::TransportError(detail) if detail.trim().is_empty() => {
            Classification::failed("Unknown error".to_string())
        }
        ProbeOutcome::TransportError(detail) => Classification::failed(detail.clone()),
    }
}
