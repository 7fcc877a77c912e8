//! REST APIハンドラー
//!
//! ヘルスチェック、ブローカー一覧、テンプレート、API情報

pub mod brokers;
pub mod error;
pub mod health;
pub mod system;
pub mod templates;

use crate::AppState;
use axum::{
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use selferase_common::error::WorkerError;
use std::any::Any;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

/// 全レスポンスに付与するセキュリティヘッダー
const SECURITY_HEADERS: [(&str, &str); 5] = [
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("x-xss-protection", "1; mode=block"),
    ("referrer-policy", "no-referrer"),
    (
        "permissions-policy",
        "geolocation=(), microphone=(), camera=()",
    ),
];

/// CORSプリフライトのキャッシュ期間
const CORS_MAX_AGE_SECS: u64 = 86400;

/// アプリケーションを作成
pub fn create_app(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(system::get_api_info))
        .route("/api", get(system::get_api_info))
        .route("/api/categories", get(system::list_categories))
        .route("/api/brokers", get(brokers::list_brokers))
        .route("/api/brokers/", get(brokers::list_brokers))
        .route("/api/brokers/:broker_id", get(brokers::get_broker))
        .route("/health-check", get(health::missing_broker_id))
        .route("/health-check/", get(health::missing_broker_id))
        .route("/health-check/*broker_id", get(health::check_broker_health))
        // 旧パス
        .route("/api/health", get(health::missing_broker_id))
        .route("/api/health/", get(health::missing_broker_id))
        .route("/api/health/*broker_id", get(health::check_broker_health))
        .route("/api/templates", get(templates::missing_template_id))
        .route("/api/templates/", get(templates::missing_template_id))
        .route("/api/templates/:template_id", get(templates::get_template))
        .fallback(not_found)
        .with_state(state);

    with_common_layers(router)
}

/// パニック捕捉・トレース・CORS・セキュリティヘッダーを適用
///
/// 外側から: セキュリティヘッダー → CORS → トレース → パニック捕捉
pub fn with_common_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .layer(middleware::map_response(apply_security_headers))
}

/// CORS設定（GET/OPTIONSのみ、オリジン制限なし）
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(CORS_MAX_AGE_SECS))
}

async fn apply_security_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    for (name, value) in SECURITY_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    response
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    error!(panic = %detail, "Request handler panicked");

    error::AppError(WorkerError::Internal(detail)).into_response()
}
