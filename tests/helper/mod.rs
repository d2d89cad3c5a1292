//! Shared setup for HTTP-level tests

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use tempfile::TempDir;
use tower::ServiceExt;

use goversion_notifier::config::{COLLECTION, Config};
use goversion_notifier::release::store::{SqliteVersionStore, VersionRecord, VersionStore};
use goversion_notifier::server::{build_app, build_watcher};

/// Minimal go.dev/dl listing whose featured macOS build is `version`
pub fn listing(version: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            "<html>\n",
            "  <h2 id=\"featured\">Featured downloads</h2>\n",
            "  <a class=\"download downloadBox\" href=\"/dl/{v}.windows-amd64.msi\">\n",
            "  <a class=\"download downloadBox\" href=\"/dl/{v}.darwin-amd64.pkg\">\n",
            "  <a class=\"download downloadBox\" href=\"/dl/{v}.linux-amd64.tar.gz\">\n",
            "</html>\n",
        ),
        v = version
    )
}

/// Config pointing both outbound URLs at `server_url` and the store into `temp_dir`
pub fn test_config(server_url: &str, temp_dir: &TempDir) -> Config {
    Config {
        port: 0,
        webhook_url: format!("{}/hook", server_url),
        project_id: "test-project".to_string(),
        db_path: temp_dir.path().join("data").join("test-project.db"),
        download_url: format!("{}/dl/", server_url),
    }
}

pub fn create_test_app(config: &Config) -> Router {
    build_app(Arc::new(build_watcher(config).unwrap()))
}

/// Open a second handle on the store used by `config`
pub fn open_store(config: &Config) -> SqliteVersionStore {
    SqliteVersionStore::new(&config.db_path, COLLECTION).unwrap()
}

pub fn seed_record(config: &Config, version: &str, date: &str) {
    open_store(config)
        .replace_all(&VersionRecord {
            version: version.to_string(),
            date: date.to_string(),
        })
        .unwrap();
}

/// Send a bodyless request to `/` and return status and body text
pub async fn send(app: Router, method: &str) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
