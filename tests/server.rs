//! End-to-end release checks through the HTTP handler

mod helper;

use axum::http::StatusCode;
use mockito::{Matcher, Server};
use serde_json::json;
use tempfile::TempDir;

use goversion_notifier::release::store::VersionStore;

use helper::{create_test_app, listing, open_store, seed_record, send, test_config};

#[tokio::test]
async fn new_version_is_announced_and_recorded() {
    let mut server = Server::new_async().await;
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&server.url(), &temp_dir);

    let page = server
        .mock("GET", "/dl/")
        .with_status(200)
        .with_body(listing("go1.19.4"))
        .create_async()
        .await;

    let expected_text = format!(
        "A new Go version [go1.19.4] is available, download for MacOS here: \
         {}/dl/go1.19.4.darwin-amd64.pkg \
         <Release Notes|https://go.dev/doc/devel/release#go1.19.minor> \
         <Github Milestone|https://github.com/golang/go/issues?q=milestone%3AGo1.19.4+label%3ACherryPickApproved+>",
        server.url()
    );
    let hook = server
        .mock("POST", "/hook")
        .match_body(Matcher::Json(json!({ "text": expected_text })))
        .with_status(200)
        .with_body("ok")
        .create_async()
        .await;

    let (status, body) = send(create_test_app(&config), "GET").await;

    page.assert_async().await;
    hook.assert_async().await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");

    let records = open_store(&config).list().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].version, "go1.19.4");
    assert_eq!(records[0].date.len(), "YYYY-MM-DD".len());
}

#[tokio::test]
async fn same_version_is_announced_only_once() {
    let mut server = Server::new_async().await;
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&server.url(), &temp_dir);

    let page = server
        .mock("GET", "/dl/")
        .with_status(200)
        .with_body(listing("go1.21.0"))
        .expect(2)
        .create_async()
        .await;
    let hook = server
        .mock("POST", "/hook")
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let app = create_test_app(&config);
    let (first, _) = send(app.clone(), "POST").await;
    let (second, _) = send(app, "POST").await;

    page.assert_async().await;
    hook.assert_async().await;
    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
}

#[tokio::test]
async fn previously_recorded_version_is_replaced() {
    let mut server = Server::new_async().await;
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&server.url(), &temp_dir);

    // Open the watcher first so the data directory exists before seeding
    let app = create_test_app(&config);
    seed_record(&config, "go1.19.3", "2022-11-01");

    server
        .mock("GET", "/dl/")
        .with_status(200)
        .with_body(listing("go1.19.4"))
        .create_async()
        .await;
    let hook = server
        .mock("POST", "/hook")
        .with_status(200)
        .create_async()
        .await;

    let (status, _) = send(app, "GET").await;

    hook.assert_async().await;
    assert_eq!(status, StatusCode::OK);

    let store = open_store(&config);
    assert_eq!(store.get("go1.19.3").unwrap(), None);
    assert_eq!(store.list().unwrap().len(), 1);
    assert!(store.get("go1.19.4").unwrap().is_some());
}

#[tokio::test]
async fn webhook_failure_returns_500_and_leaves_store_unchanged() {
    let mut server = Server::new_async().await;
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&server.url(), &temp_dir);

    server
        .mock("GET", "/dl/")
        .with_status(200)
        .with_body(listing("go1.19.4"))
        .create_async()
        .await;
    let hook = server
        .mock("POST", "/hook")
        .with_status(500)
        .with_body("internal_error")
        .create_async()
        .await;

    let (status, body) = send(create_test_app(&config), "GET").await;

    hook.assert_async().await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Internal Server Error");
    assert!(open_store(&config).list().unwrap().is_empty());
}

#[tokio::test]
async fn download_page_failure_returns_500_without_notifying() {
    let mut server = Server::new_async().await;
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&server.url(), &temp_dir);

    server
        .mock("GET", "/dl/")
        .with_status(502)
        .create_async()
        .await;
    let hook = server
        .mock("POST", "/hook")
        .expect(0)
        .create_async()
        .await;

    let (status, _) = send(create_test_app(&config), "GET").await;

    hook.assert_async().await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn page_without_version_returns_500_without_notifying() {
    let mut server = Server::new_async().await;
    let temp_dir = TempDir::new().unwrap();
    let config = test_config(&server.url(), &temp_dir);

    server
        .mock("GET", "/dl/")
        .with_status(200)
        .with_body("<html><body>We'll be right back</body></html>")
        .create_async()
        .await;
    let hook = server
        .mock("POST", "/hook")
        .expect(0)
        .create_async()
        .await;

    let (status, body) = send(create_test_app(&config), "GET").await;

    hook.assert_async().await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "Internal Server Error");
    assert!(open_store(&config).list().unwrap().is_empty());
}
