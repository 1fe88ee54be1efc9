// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{http::HeaderMap, http::StatusCode, routing::get, Router};
use std::net::SocketAddr;
use std::time::Duration;
use truthbot::questions::{FetchError, HttpFetcher, SourceFetcher};

use super::mock::list_page;

/// Serve a small question site on an ephemeral port
async fn spawn_source_server() -> SocketAddr {
    let app = Router::new()
        .route(
            "/questions",
            get(|| async { list_page(&["What is your favourite colour?"]) }),
        )
        .route(
            "/error",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route(
            "/created",
            get(|| async { (StatusCode::CREATED, "not quite ok") }),
        )
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "too late"
            }),
        )
        .route(
            "/ua",
            get(|headers: HeaderMap| async move {
                headers
                    .get("user-agent")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string()
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn fetcher() -> HttpFetcher {
    HttpFetcher::new(Duration::from_secs(2), "truthbot-test/1.0")
}

#[tokio::test]
async fn test_fetch_returns_body() {
    let addr = spawn_source_server().await;
    let fetcher = fetcher();

    let body = fetcher
        .fetch(&format!("http://{}/questions", addr))
        .await
        .unwrap();

    assert!(body.contains("<li>What is your favourite colour?</li>"));
    assert!(fetcher.is_open());
}

#[tokio::test]
async fn test_fetch_sends_configured_user_agent() {
    let addr = spawn_source_server().await;

    let body = fetcher().fetch(&format!("http://{}/ua", addr)).await.unwrap();

    assert_eq!(body, "truthbot-test/1.0");
}

#[tokio::test]
async fn test_server_error_is_status_failure() {
    let addr = spawn_source_server().await;

    let err = fetcher()
        .fetch(&format!("http://{}/error", addr))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 500, .. }));
}

#[tokio::test]
async fn test_non_200_success_is_failure() {
    let addr = spawn_source_server().await;

    let err = fetcher()
        .fetch(&format!("http://{}/created", addr))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 201, .. }));
}

#[tokio::test]
async fn test_slow_source_times_out() {
    let addr = spawn_source_server().await;
    let fetcher = HttpFetcher::new(Duration::from_millis(200), "truthbot-test/1.0");

    let err = fetcher
        .fetch(&format!("http://{}/slow", addr))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Timeout { .. }), "{:?}", err);
}

#[tokio::test]
async fn test_connection_refused_is_http_failure() {
    let err = fetcher().fetch("http://127.0.0.1:1/").await.unwrap_err();

    assert!(matches!(err, FetchError::Http { .. }), "{:?}", err);
}

#[tokio::test]
async fn test_closed_fetcher_rejects_requests() {
    let addr = spawn_source_server().await;
    let fetcher = fetcher();

    fetcher
        .fetch(&format!("http://{}/questions", addr))
        .await
        .unwrap();
    fetcher.close();
    fetcher.close();

    assert!(!fetcher.is_open());
    let err = fetcher
        .fetch(&format!("http://{}/questions", addr))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::ClientClosed));
}
