//! オプトアウトテンプレートAPI

use super::error::AppError;
use crate::catalog::templates;
use axum::{
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
};
use selferase_common::error::WorkerError;

/// GET /api/templates/:template_id
///
/// 本文は `text/plain` で返す。
pub async fn get_template(Path(template_id): Path<String>) -> Result<Response, AppError> {
    let text =
        templates::get(&template_id).ok_or(WorkerError::TemplateNotFound(template_id))?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    )
        .into_response())
}

/// GET /api/templates/（ID未指定）
pub async fn missing_template_id() -> AppError {
    WorkerError::MissingParameter("template_id").into()
}
