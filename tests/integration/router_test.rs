//! HTTP surface of the assembled application

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use pretty_assertions::assert_eq;
use tower::ServiceExt;
use xftodo::backend::server::{create_app, ServerConfig};

use crate::common::database::sqlite_url;

async fn get(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn config_for(static_dir: &tempfile::TempDir, database_url: Option<String>) -> ServerConfig {
    ServerConfig {
        port: 0,
        database_url,
        static_dir: static_dir.path().to_path_buf(),
        broadcast_updates: false,
    }
}

#[tokio::test]
async fn test_health_reports_sqlite_backend() {
    let site = tempfile::tempdir().unwrap();
    let db = tempfile::tempdir().unwrap();
    let app = create_app(&config_for(&site, Some(sqlite_url(&db)))).await;

    let (status, body) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json, serde_json::json!({"status": "ok", "store": "sqlite"}));
}

#[tokio::test]
async fn test_index_is_served_at_root() {
    let site = tempfile::tempdir().unwrap();
    std::fs::write(site.path().join("index.html"), "<title>todo</title>").unwrap();
    let app = create_app(&config_for(&site, None)).await;

    let (status, body) = get(app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<title>todo</title>");
}

#[tokio::test]
async fn test_missing_frontend_is_not_found() {
    let site = tempfile::tempdir().unwrap();
    let app = create_app(&config_for(&site, None)).await;

    let (status, _) = get(app, "/anything").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_plain_get_on_socket_path_is_rejected() {
    let site = tempfile::tempdir().unwrap();
    let app = create_app(&config_for(&site, None)).await;

    let (status, _) = get(app, "/ws").await;

    assert!(status.is_client_error(), "got {}", status);
}
