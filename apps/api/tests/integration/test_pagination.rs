use super::helpers::{assert_status, expect_status, get, read_json, send, spawn_app};
use axum::http::StatusCode;
use picture_api::domain::shared::pagination::PageNavigation;
use serde_json::Value;

async fn navigation(uri: &str) -> PageNavigation {
    let app = spawn_app();
    let res = expect_status(send(&app.app, get(uri)).await, StatusCode::OK).await;
    read_json(res).await
}

#[tokio::test]
async fn first_page_window_and_arrows() {
    let nav = navigation("/api/pagination?current=1&page_size=10&total=54").await;

    assert_eq!(nav.page_count, 6);
    assert_eq!(nav.pages, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(nav.previous, None);
    assert_eq!(nav.next, Some(2));
}

#[tokio::test]
async fn last_page_window_and_arrows() {
    let nav = navigation("/api/pagination?current=6&page_size=10&total=54").await;

    assert_eq!(nav.pages, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(nav.previous, Some(5));
    assert_eq!(nav.next, None);
}

#[tokio::test]
async fn window_slides_over_long_lists() {
    let nav = navigation("/api/pagination?current=12&page_size=10&total=300").await;

    assert_eq!(nav.page_count, 30);
    assert_eq!(nav.pages, (7..=16).collect::<Vec<_>>());
}

#[tokio::test]
async fn missing_fields_fall_back_to_defaults() {
    let nav = navigation("/api/pagination").await;

    assert_eq!(nav.pagination.current, 1);
    assert_eq!(nav.pagination.page_size, 10);
    assert_eq!(nav.pagination.total, 0);
    assert!(nav.pages.is_empty());
}

#[tokio::test]
async fn out_of_range_current_is_tolerated() {
    let nav = navigation("/api/pagination?current=99&page_size=10&total=54").await;

    assert_eq!(nav.pages, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(nav.next, None);
    assert_eq!(nav.previous, Some(98));
}

#[tokio::test]
async fn zero_page_size_is_rejected() {
    let app = spawn_app();

    let res = send(&app.app, get("/api/pagination?current=1&page_size=0&total=54")).await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
    let payload: Value = read_json(res).await;
    assert!(
        payload["error"]
            .as_str()
            .is_some_and(|msg| msg.contains("page_size")),
        "unexpected error body: {payload}"
    );
}

#[tokio::test]
async fn negative_total_is_rejected() {
    let app = spawn_app();

    let res = send(&app.app, get("/api/pagination?total=-1")).await;
    assert_status(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn largest_total_keeps_pages_navigable() {
    let nav = navigation("/api/pagination?current=1&page_size=2&total=9223372036854775807").await;

    assert_eq!(nav.page_count, i64::MAX / 2 + 1);
    assert_eq!(nav.pages, (1..=9).collect::<Vec<_>>());
    assert_eq!(nav.previous, None);
    assert_eq!(nav.next, Some(2));
}
