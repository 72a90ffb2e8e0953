use client::{FetchError, RequestConfig};
use reqwest::StatusCode;
use serde_json::{Value, json};

use test_helpers::{assert_status_code, spawn_app};

#[tokio::test]
async fn success_reports_parsed_body() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let data: Value = app
        .client
        .fetch_json(&app.url("/object"), &RequestConfig::default())
        .await?;
    assert_eq!(data, json!({ "a": 1 }));

    Ok(())
}

#[tokio::test]
async fn server_error_reports_status_text() {
    let app = spawn_app().await;

    let result: Result<Value, _> = app
        .client
        .fetch_json(&app.url("/status/500"), &RequestConfig::default())
        .await;

    match result {
        Err(FetchError::Status(code, text)) => {
            assert_eq!(code, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(text, "Internal Server Error");
        }
        _ => panic!("Expected Status error"),
    }
}

#[tokio::test]
async fn not_found_reports_status() {
    let app = spawn_app().await;

    let result: Result<Value, _> = app
        .client
        .fetch_json(&app.url("/status/404"), &RequestConfig::default())
        .await;
    assert_status_code(result, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_body_is_a_transport_error() {
    let app = spawn_app().await;

    let result: Result<Value, _> = app
        .client
        .fetch_json(&app.url("/not-json"), &RequestConfig::default())
        .await;

    match result {
        Err(error @ FetchError::Network(_)) => {
            // Parse failures surface with the same generic message as
            // network failures.
            assert_eq!(error.to_string(), "Could not fetch the data");
        }
        _ => panic!("Expected Network error"),
    }
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Bind a port and immediately free it so nothing is listening there.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let client = client::FetchClient::new();
    let result: Result<Value, _> = client
        .fetch_json(
            &format!("http://127.0.0.1:{port}/trips"),
            &RequestConfig::default(),
        )
        .await;
    assert!(matches!(result, Err(FetchError::Network(_))));
}

#[tokio::test]
async fn repeat_fetches_agree() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let config = RequestConfig::default();

    let first: Value =
        app.client.fetch_json(&app.url("/trips"), &config).await?;
    let second: Value =
        app.client.fetch_json(&app.url("/trips"), &config).await?;
    assert_eq!(first, second);

    Ok(())
}
