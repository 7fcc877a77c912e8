//! Contract Test: GET /health-check/:broker_id

use crate::support::{builtin_state, probe::StaticProbe};
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use selferase_workers::api;
use selferase_workers::health::ProbeOutcome;
use serde_json::Value;
use std::time::Duration;
use tower::ServiceExt;

const SPOKEO_URL: &str = "https://www.spokeo.com/optout";

fn build_app(probe: StaticProbe) -> Router {
    api::create_app(builtin_state(probe))
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/json"
    );
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn healthy_broker_returns_full_record() {
    let (status, body) = get_json(build_app(StaticProbe::new()), "/health-check/spokeo").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["brokerId"], "spokeo");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["httpStatus"], 200);
    assert_eq!(body["url"], SPOKEO_URL);
    assert_eq!(body["message"], "Broker site is accessible");
    assert!(body.get("errorDetail").is_none());
    assert!(body["checkedAt"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn server_error_is_degraded() {
    let probe = StaticProbe::new().with_outcome(SPOKEO_URL, ProbeOutcome::Responded(503));
    let (status, body) = get_json(build_app(probe), "/health-check/spokeo").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["httpStatus"], 503);
    assert_eq!(body["message"], "Broker site may be experiencing issues");
}

#[tokio::test]
async fn timeout_is_reported_as_error_record() {
    let probe = StaticProbe::new().with_outcome(
        SPOKEO_URL,
        ProbeOutcome::TimedOut(Duration::from_millis(5000)),
    );
    let (status, body) = get_json(build_app(probe), "/health-check/spokeo").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "error");
    assert!(body.get("httpStatus").is_none());
    assert_eq!(body["message"], "Failed to check broker health");
    assert_eq!(body["errorDetail"], "timed out after 5000 ms");
    assert_eq!(body["url"], SPOKEO_URL);
}

#[tokio::test]
async fn unknown_broker_returns_200_without_probing() {
    let probe = StaticProbe::new();
    let (status, body) = get_json(build_app(probe.clone()), "/health-check/nope").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["brokerId"], "nope");
    assert_eq!(body["status"], "unknown");
    assert_eq!(body["message"], "Broker not found");
    assert!(body.get("url").is_none());
    assert!(body.get("httpStatus").is_none());
    assert_eq!(probe.calls(), 0);
}

#[tokio::test]
async fn irregular_ids_are_unknown_records() {
    let cases = [
        ("/health-check/%FF", "%FF"),
        ("/health-check/a/b", "a/b"),
        ("/health-check/whitepages/", "whitepages/"),
        ("/api/health/a/b", "a/b"),
    ];

    for (uri, expected_id) in cases {
        let probe = StaticProbe::new();
        let (status, body) = get_json(build_app(probe.clone()), uri).await;

        assert_eq!(status, StatusCode::OK, "uri: {uri}");
        assert_eq!(body["brokerId"], expected_id, "uri: {uri}");
        assert_eq!(body["status"], "unknown", "uri: {uri}");
        assert_eq!(body["message"], "Broker not found");
        assert!(body.get("url").is_none());
        assert_eq!(probe.calls(), 0);
    }
}

#[tokio::test]
async fn legacy_path_is_served() {
    let (status, body) = get_json(build_app(StaticProbe::new()), "/api/health/whitepages").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["brokerId"], "whitepages");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn missing_broker_id_is_bad_request() {
    for uri in ["/health-check", "/health-check/", "/api/health", "/api/health/"] {
        let (status, body) = get_json(build_app(StaticProbe::new()), uri).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {uri}");
        assert_eq!(body["error"], "Broker ID required");
    }
}
