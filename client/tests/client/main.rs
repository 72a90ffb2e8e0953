mod fetch;

use client::RequestConfig;
use test_helpers::{mock, spawn_app};

#[tokio::test]
async fn trips_round_trip() -> anyhow::Result<()> {
    let app = spawn_app().await;

    let trips: Vec<mock::Trip> = app
        .client
        .fetch_json(&app.url("/trips"), &RequestConfig::default())
        .await?;
    assert_eq!(trips, mock::trips());

    Ok(())
}
