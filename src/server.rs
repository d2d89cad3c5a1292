//! HTTP entry point: every request to `/` runs one release check

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{Router, extract::State, http::StatusCode, routing::any};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::config::{COLLECTION, Config};
use crate::release::extractor::MarkerExtractor;
use crate::release::notifier::WebhookNotifier;
use crate::release::page::GoDownloadPage;
use crate::release::store::SqliteVersionStore;
use crate::release::workflow::{ReleaseWatcher, WorkflowOutcome};

const USER_AGENT: &str = concat!("goversion-notifier/", env!("CARGO_PKG_VERSION"));

/// Wire the production collaborators described by `config`
pub fn build_watcher(config: &Config) -> Result<ReleaseWatcher> {
    if let Some(parent) = config.db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create data directory {:?}", parent))?;
    }

    let store = SqliteVersionStore::new(&config.db_path, COLLECTION)
        .context("Failed to open version store")?;

    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to create HTTP client")?;

    Ok(ReleaseWatcher::new(
        Arc::new(GoDownloadPage::new(client.clone(), &config.download_url)),
        Arc::new(MarkerExtractor::default()),
        Arc::new(store),
        Arc::new(WebhookNotifier::new(client, &config.webhook_url)),
        &config.download_url,
    ))
}

pub fn build_app(watcher: Arc<ReleaseWatcher>) -> Router {
    Router::new()
        .route("/", any(check_release))
        .layer(TraceLayer::new_for_http())
        .with_state(watcher)
}

async fn check_release(State(watcher): State<Arc<ReleaseWatcher>>) -> (StatusCode, &'static str) {
    match watcher.run().await {
        Ok(WorkflowOutcome::Unchanged { .. }) | Ok(WorkflowOutcome::Notified { .. }) => {
            (StatusCode::OK, "OK")
        }
        Err(e) => {
            error!("Release check failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
    }
}

pub async fn run_server(config: &Config) -> Result<()> {
    let watcher = Arc::new(build_watcher(config)?);
    let app = build_app(watcher);

    let addr = format!("0.0.0.0:{}", config.port);
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
