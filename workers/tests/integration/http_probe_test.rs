//! Integration Test: HTTPプローブ → 分類 → レコード
//!
//! wiremockでブローカーのオプトアウトページを模擬する。

use chrono::{DateTime, Utc};
use selferase_common::types::{BrokerEndpoint, HealthStatus};
use selferase_workers::health::{BrokerHealthChecker, HttpProbe};
use selferase_workers::registry::BrokerRegistry;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn checker_for(endpoints: Vec<(&str, String)>, deadline: Duration) -> BrokerHealthChecker {
    let registry = BrokerRegistry::new(endpoints.into_iter().map(|(id, url)| BrokerEndpoint {
        id: id.to_string(),
        url,
    }));
    let probe = HttpProbe::new("SelfErase-HealthCheck/1.0", 10).unwrap();
    BrokerHealthChecker::new(registry, Arc::new(probe)).with_deadline(deadline)
}

#[tokio::test]
async fn head_200_is_healthy() {
    let mock = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/optout"))
        .and(header("user-agent", "SelfErase-HealthCheck/1.0"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock)
        .await;

    let url = format!("{}/optout", mock.uri());
    let checker = checker_for(vec![("acme", url.clone())], Duration::from_secs(5));

    let started: DateTime<Utc> = Utc::now();
    let record = checker.check("acme").await;

    assert_eq!(record.status, HealthStatus::Healthy);
    assert_eq!(record.http_status, Some(200));
    assert_eq!(record.url.as_deref(), Some(url.as_str()));
    assert!(record.checked_at >= started);
}

#[tokio::test]
async fn redirect_is_followed_to_final_status() {
    let mock = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/new"))
        .mount(&mock)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock)
        .await;

    let checker = checker_for(
        vec![("acme", format!("{}/old", mock.uri()))],
        Duration::from_secs(5),
    );
    let record = checker.check("acme").await;

    assert_eq!(record.status, HealthStatus::Healthy);
    assert_eq!(record.http_status, Some(200));
}

#[tokio::test]
async fn not_found_and_server_error_are_degraded() {
    let mock = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock)
        .await;

    let checker = checker_for(
        vec![
            ("gone", format!("{}/gone", mock.uri())),
            ("broken", format!("{}/broken", mock.uri())),
        ],
        Duration::from_secs(5),
    );

    let gone = checker.check("gone").await;
    assert_eq!(gone.status, HealthStatus::Degraded);
    assert_eq!(gone.http_status, Some(404));

    let broken = checker.check("broken").await;
    assert_eq!(broken.status, HealthStatus::Degraded);
    assert_eq!(broken.http_status, Some(500));
    assert!(broken.error_detail.is_none());
}

#[tokio::test]
async fn slow_response_times_out() {
    let mock = MockServer::start().await;
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&mock)
        .await;

    let checker = checker_for(
        vec![("slow", format!("{}/optout", mock.uri()))],
        Duration::from_millis(200),
    );

    let started = std::time::Instant::now();
    let record = checker.check("slow").await;

    assert!(started.elapsed() < Duration::from_secs(2));
    assert_eq!(record.status, HealthStatus::Error);
    assert_eq!(record.http_status, None);
    assert_eq!(record.message, "Failed to check broker health");
    assert_eq!(record.error_detail.as_deref(), Some("timed out after 200 ms"));
}

#[tokio::test]
async fn connection_refused_is_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let checker = checker_for(
        vec![("closed", format!("http://127.0.0.1:{}/", port))],
        Duration::from_secs(5),
    );
    let record = checker.check("closed").await;

    assert_eq!(record.status, HealthStatus::Error);
    assert_eq!(record.http_status, None);
    assert!(!record.error_detail.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn concurrent_checks_are_independent() {
    let mock = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/fast"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&mock)
        .await;

    let checker = checker_for(
        vec![
            ("fast", format!("{}/fast", mock.uri())),
            ("slow", format!("{}/slow", mock.uri())),
        ],
        Duration::from_millis(300),
    );

    let ids = vec!["slow".to_string(), "fast".to_string(), "missing".to_string()];
    let records = checker.check_many(&ids).await;

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].broker_id, "slow");
    assert_eq!(records[0].status, HealthStatus::Error);
    assert_eq!(records[1].broker_id, "fast");
    assert_eq!(records[1].status, HealthStatus::Healthy);
    assert_eq!(records[1].http_status, Some(204));
    assert_eq!(records[2].status, HealthStatus::Unknown);
}

#[tokio::test]
async fn same_broker_checked_twice_runs_independently() {
    let mock = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/fast"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .expect(2)
        .mount(&mock)
        .await;

    let checker = checker_for(
        vec![
            ("fast", format!("{}/fast", mock.uri())),
            ("slow", format!("{}/slow", mock.uri())),
        ],
        Duration::from_millis(300),
    );

    let ids = vec!["slow".to_string(), "slow".to_string(), "fast".to_string()];
    let started = std::time::Instant::now();
    let records = checker.check_many(&ids).await;

    // 締め切りは各チェックごとに独立して適用される
    assert!(started.elapsed() < Duration::from_secs(1));
    assert_eq!(records.len(), 3);
    for slow in &records[..2] {
        assert_eq!(slow.broker_id, "slow");
        assert_eq!(slow.status, HealthStatus::Error);
        assert_eq!(slow.error_detail.as_deref(), Some("timed out after 300 ms"));
    }
    assert_eq!(records[2].broker_id, "fast");
    assert_eq!(records[2].status, HealthStatus::Healthy);
    assert_eq!(records[2].http_status, Some(200));
}
