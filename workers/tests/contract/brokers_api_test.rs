//! Contract Test: GET /api/brokers, GET /api/brokers/:broker_id

use crate::support::{builtin_state, probe::StaticProbe};
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use selferase_workers::api;
use serde_json::Value;
use tower::ServiceExt;

async fn get(uri: &str) -> (StatusCode, Value) {
    let app = api::create_app(builtin_state(StaticProbe::new()));
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn list_returns_catalog() {
    let (status, body) = get("/api/brokers").await;

    assert_eq!(status, StatusCode::OK);
    let brokers = body.as_array().unwrap();
    assert_eq!(brokers.len(), 5);
    assert_eq!(brokers[0]["id"], "whitepages");
    assert!(brokers[0]["optOutUrl"].as_str().unwrap().starts_with("https://"));
    assert!(brokers[0]["optOutMethod"]["type"].is_string());
}

#[tokio::test]
async fn detail_returns_single_broker() {
    let (status, body) = get("/api/brokers/truthfinder").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], "truthfinder");
    assert_eq!(body["category"], "Background Check");
}

#[tokio::test]
async fn unknown_broker_detail_is_not_found() {
    let (status, body) = get("/api/brokers/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Broker not found");
}
