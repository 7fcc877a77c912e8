//! API情報・カテゴリ

use super::error::AppError;
use crate::catalog::CATEGORIES;
use axum::{
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use selferase_common::error::{CommonError, WorkerError};
use selferase_common::protocol::ApiInfo;

/// GET / および GET /api
///
/// 人が読むことを想定して整形済みJSONを返す。
pub async fn get_api_info() -> Result<Response, AppError> {
    let info = ApiInfo::new(env!("CARGO_PKG_VERSION"));
    let body = serde_json::to_string_pretty(&info)
        .map_err(|e| WorkerError::Common(CommonError::Serialization(e)))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// GET /api/categories
pub async fn list_categories() -> Json<Vec<&'static str>> {
    Json(CATEGORIES.to_vec())
}
