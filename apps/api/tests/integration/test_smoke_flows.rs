use super::helpers::{expect_status, get, read_json, send, spawn_app};
use axum::http::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn health_reports_dataset_size() {
    let app = spawn_app();

    let res = expect_status(send(&app.app, get("/health")).await, StatusCode::OK).await;
    let payload: Value = read_json(res).await;

    assert_eq!(payload["status"].as_str(), Some("healthy"));
    assert_eq!(payload["pictures"].as_i64(), Some(54));
    assert_eq!(
        payload["partition"].as_str(),
        Some(app.config.picture_partition.as_str())
    );
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = spawn_app();

    let res = send(&app.app, get("/health")).await;
    let id = res
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .expect("missing x-request-id header");
    assert_eq!(id.len(), 36);
}

#[tokio::test]
async fn smoke_browse_every_page_via_navigation() {
    let app = spawn_app();
    let mut current = 1;
    let mut seen = 0;

    loop {
        let res = expect_status(
            send(&app.app, get(&format!("/api/gallery?current={current}"))).await,
            StatusCode::OK,
        )
        .await;
        let payload: Value = read_json(res).await;

        seen += payload["list"].as_array().map(|v| v.len()).unwrap_or(0);
        assert_eq!(payload["navigation"]["pages"], serde_json::json!([1, 2, 3, 4, 5, 6]));

        match payload["navigation"]["next"].as_i64() {
            Some(next) => current = next,
            None => break,
        }
    }

    assert_eq!(current, 6);
    assert_eq!(seen, 54);
}
