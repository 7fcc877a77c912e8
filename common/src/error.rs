//! エラー型定義
//!
//! 統一エラー型（thiserror使用）
//!
//! プローブの失敗（タイムアウト・通信エラー）はここには含まれない。
//! それらは `HealthRecord` のデータとして呼び出し元へ返される。

use axum::http::StatusCode;
use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Workers error type
#[derive(Debug, Error)]
pub enum WorkerError {
    /// Common layer error
    #[error(transparent)]
    Common(#[from] CommonError),

    /// Required path parameter is missing
    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),

    /// Broker not found in the catalog
    #[error("Broker not found: {0}")]
    BrokerNotFound(String),

    /// Template not found
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// I/O error (catalog file, listener)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl WorkerError {
    /// Returns a safe error message for external clients.
    ///
    /// Full error details (file paths, parser positions) stay in server logs.
    pub fn external_message(&self) -> &'static str {
        match self {
            Self::Common(CommonError::Validation(_)) => "Invalid request",
            Self::Common(_) => "Internal server error",
            Self::MissingParameter("broker_id") => "Broker ID required",
            Self::MissingParameter("template_id") => "Template ID required",
            Self::MissingParameter(_) => "Missing parameter",
            Self::BrokerNotFound(_) => "Broker not found",
            Self::TemplateNotFound(_) => "Template not found",
            Self::Io(_) => "Internal server error",
            Self::Internal(_) => "Internal server error",
        }
    }

    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Common(CommonError::Validation(_)) => StatusCode::BAD_REQUEST,
            Self::Common(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::MissingParameter(_) => StatusCode::BAD_REQUEST,
            Self::BrokerNotFound(_) => StatusCode::NOT_FOUND,
            Self::TemplateNotFound(_) => StatusCode::NOT_FOUND,
            Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Result type alias (Common)
pub type CommonResult<T> = Result<T, CommonError>;

/// Result type alias (Workers)
pub type WorkerResult<T> = Result<T, WorkerError>;
