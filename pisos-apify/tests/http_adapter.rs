use httpmock::prelude::*;
use serde_json::json;
use url::Url;

use pisos_apify::adapter::{ApifyApi, RealAdapter, RunStatus};
use pisos_core::PisosError;

fn adapter_for(server: &MockServer) -> RealAdapter {
    RealAdapter::with_base_url("tok", Url::parse(&server.base_url()).unwrap())
}

#[tokio::test]
async fn start_run_posts_the_input_with_the_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v2/acts/user~idealista-scraper/runs")
                .query_param("token", "tok")
                .json_body(json!({"operation": "sale", "locationQuery": "madrid"}));
            then.status(201).json_body(json!({
                "data": {"id": "run-1", "status": "READY", "defaultDatasetId": "ds-1"}
            }));
        })
        .await;

    let run = adapter_for(&server)
        .start_run(
            "user~idealista-scraper",
            &json!({"operation": "sale", "locationQuery": "madrid"}),
        )
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(run.id, "run-1");
    assert_eq!(run.status, RunStatus::Ready);
    assert_eq!(run.default_dataset_id.as_deref(), Some("ds-1"));
}

#[tokio::test]
async fn run_info_parses_hyphenated_statuses() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/actor-runs/run-9")
                .query_param("token", "tok");
            then.status(200)
                .json_body(json!({"data": {"id": "run-9", "status": "TIMED-OUT"}}));
        })
        .await;

    let info = adapter_for(&server).run_info("run-9").await.unwrap();
    assert_eq!(info.status, RunStatus::TimedOut);
    assert!(info.status.is_terminal());
}

#[tokio::test]
async fn unknown_statuses_deserialize_and_are_not_terminal() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/actor-runs/run-10");
            then.status(200)
                .json_body(json!({"data": {"id": "run-10", "status": "RESURRECTING"}}));
        })
        .await;

    let info = adapter_for(&server).run_info("run-10").await.unwrap();
    assert_eq!(info.status, RunStatus::Unknown);
    assert!(!info.status.is_terminal());
}

#[tokio::test]
async fn dataset_items_preserve_order_and_fields() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/datasets/ds-1/items")
                .query_param("token", "tok")
                .query_param("format", "json");
            then.status(200).json_body(json!([
                {"zeta": 1, "alpha": 2, "title": "Piso A"},
                {"title": "Piso B", "price": 950}
            ]));
        })
        .await;

    let items = adapter_for(&server).dataset_items("ds-1").await.unwrap();
    assert_eq!(items.len(), 2);
    // preserve_order keeps the remote field order intact.
    let keys: Vec<_> = items[0].keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["zeta", "alpha", "title"]);
    assert_eq!(items[1]["price"], 950);
}

#[tokio::test]
async fn missing_dataset_maps_to_not_found() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v2/datasets/nope/items");
            then.status(404).json_body(json!({"error": {"type": "record-not-found"}}));
        })
        .await;

    let err = adapter_for(&server).dataset_items("nope").await.unwrap_err();
    assert!(matches!(err, PisosError::NotFound { .. }));
}

#[tokio::test]
async fn server_errors_map_to_connector_failures() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/v2/acts/a~b/runs");
            then.status(500).body("internal error");
        })
        .await;

    let err = adapter_for(&server)
        .start_run("a~b", &json!({}))
        .await
        .unwrap_err();
    match err {
        PisosError::Connector { connector, msg } => {
            assert_eq!(connector, "pisos-apify");
            assert!(msg.contains("500"), "{msg}");
        }
        other => panic!("expected connector error, got {other:?}"),
    }
}
