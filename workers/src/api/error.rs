//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use axum::{response::IntoResponse, Json};
use selferase_common::error::WorkerError;
use selferase_common::protocol::ErrorResponse;
use tracing::{debug, error};

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub WorkerError);

impl From<WorkerError> for AppError {
    fn from(err: WorkerError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // external_message() はファイルパス等の内部情報を含まない
        let status = self.0.status_code();
        if status.is_server_error() {
            error!(error = %self.0, "Request failed");
        } else {
            debug!(error = %self.0, status = status.as_u16(), "Request rejected");
        }

        let payload = ErrorResponse::new(self.0.external_message());
        (status, Json(payload)).into_response()
    }
}
