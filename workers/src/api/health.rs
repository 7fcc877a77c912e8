//! ヘルスチェックAPI
//!
//! `GET /health-check/*broker_id`（旧: `GET /api/health/*broker_id`）

use super::error::AppError;
use crate::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::Uri,
    Json,
};
use selferase_common::error::WorkerError;
use selferase_common::types::HealthRecord;
use tracing::debug;

const ROUTE_PREFIXES: [&str; 2] = ["/health-check/", "/api/health/"];

/// GET /health-check/*broker_id
///
/// 未登録のブローカーでも 404 ではなく 200 + `status: "unknown"` を返す。
/// 既存クライアントがこの挙動に依存しているため意図的に維持している。
/// デコードできないIDやスラッシュを含むIDも、そのまま未登録として扱う。
pub async fn check_broker_health(
    State(state): State<AppState>,
    uri: Uri,
    broker_id: Result<Path<String>, PathRejection>,
) -> Result<Json<HealthRecord>, AppError> {
    let broker_id = match broker_id {
        Ok(Path(broker_id)) => broker_id,
        Err(rejection) => {
            debug!(path = %uri.path(), error = %rejection, "Using raw broker id segment");
            raw_broker_id(uri.path()).to_string()
        }
    };
    if broker_id.is_empty() {
        return Err(WorkerError::MissingParameter("broker_id").into());
    }

    let record = state.health_checker.check(&broker_id).await;
    Ok(Json(record))
}

/// GET /health-check/（ID未指定）
pub async fn missing_broker_id() -> AppError {
    WorkerError::MissingParameter("broker_id").into()
}

/// ルート接頭辞より後ろの生のパス
fn raw_broker_id(path: &str) -> &str {
    ROUTE_PREFIXES
        .iter()
        .find_map(|prefix| path.strip_prefix(prefix))
        .unwrap_or_default()
}
