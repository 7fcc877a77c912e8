//! ヘルスレコードの組み立て

use super::classifier::Classification;
use chrono::Utc;
use selferase_common::types::HealthRecord;

/// 分類結果からヘルスレコードを作成し、現在時刻を `checked_at` に刻む
pub fn compose(broker_id: &str, classification: Classification, url: Option<&str>) -> HealthRecord {
    HealthRecord {
        broker_id: broker_id.to_string(),
        status: classification.status,
        http_status: classification.http_status,
        url: url.map(str::to_string),
        message: classification.message,
        error_detail: classification.error_detail,
        checked_at: Utc::now(),
    }
}
