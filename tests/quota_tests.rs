//! Integration tests for the daily call budget.

mod common;

use chrono::{Duration, TimeZone, Utc};
use common::{api_path, builder_for};
use serde_json::json;
use walmart_io::{Clock, ManualClock, QuotaPolicy, RequestOptions, WalmartError, WalmartIo};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn taxonomy_server(expected_calls: u64) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("taxonomy")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"categories": []})))
        .expect(expected_calls)
        .mount(&mock_server)
        .await;
    mock_server
}

#[tokio::test]
async fn test_exhausted_budget_fails_without_sending() {
    let mock_server = taxonomy_server(2).await;
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());
    let config = builder_for(&mock_server.uri())
        .daily_calls(2)
        .clock(clock.clone())
        .build()
        .unwrap();
    let walmart = WalmartIo::new(config);

    walmart.taxonomy(RequestOptions::new()).send().await.unwrap();
    walmart.taxonomy(RequestOptions::new()).send().await.unwrap();
    assert_eq!(walmart.remaining_calls(), 0);

    match walmart.taxonomy(RequestOptions::new()).send().await {
        Err(WalmartError::QuotaExceeded(error)) => {
            assert_eq!(error.daily_limit, 2);
            assert_eq!(error.resets_at, clock.now() + Duration::hours(24));
        }
        other => panic!("Expected QuotaExceeded, got {other:?}"),
    }
}

#[tokio::test]
async fn test_budget_recovers_after_window() {
    let mock_server = taxonomy_server(2).await;
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());
    let config = builder_for(&mock_server.uri())
        .daily_calls(1)
        .clock(clock.clone())
        .build()
        .unwrap();
    let walmart = WalmartIo::new(config);

    walmart.taxonomy(RequestOptions::new()).send().await.unwrap();
    assert!(walmart.taxonomy(RequestOptions::new()).send().await.is_err());

    clock.advance(Duration::hours(24) + Duration::seconds(1));
    assert_eq!(walmart.remaining_calls(), 1);
    walmart.taxonomy(RequestOptions::new()).send().await.unwrap();
    assert_eq!(walmart.remaining_calls(), 0);
}

#[tokio::test]
async fn test_warn_policy_keeps_sending() {
    let mock_server = taxonomy_server(3).await;
    let config = builder_for(&mock_server.uri())
        .daily_calls(1)
        .on_quota_exceeded(QuotaPolicy::WarnAndProceed)
        .build()
        .unwrap();
    let walmart = WalmartIo::new(config);

    for _ in 0..3 {
        walmart.taxonomy(RequestOptions::new()).send().await.unwrap();
    }
    assert_eq!(walmart.remaining_calls(), 0);
}

#[tokio::test]
async fn test_invalid_calls_do_not_spend_budget() {
    let walmart = WalmartIo::new(builder_for("http://127.0.0.1:9").daily_calls(3).build().unwrap());

    let result = walmart.stores(RequestOptions::new()).send().await;
    assert!(matches!(result, Err(WalmartError::InvalidParameter(_))));
    assert_eq!(walmart.remaining_calls(), 3);
}
