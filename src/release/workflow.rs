//! Release check workflow: fetch, extract, check, notify, persist

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

use crate::release::error::WorkflowError;
use crate::release::extractor::VersionExtractor;
use crate::release::message::release_message;
use crate::release::notifier::Notifier;
use crate::release::page::ReleasePage;
use crate::release::store::{VersionRecord, VersionStore};

/// Result of a successful release check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// The latest release was already recorded
    Unchanged { version: String },
    /// A new release was announced and recorded
    Notified { version: String },
}

/// Groups the collaborators of a release check
pub struct ReleaseWatcher {
    page: Arc<dyn ReleasePage>,
    extractor: Arc<dyn VersionExtractor>,
    store: Arc<dyn VersionStore>,
    notifier: Arc<dyn Notifier>,
    download_url: String,
}

impl ReleaseWatcher {
    pub fn new(
        page: Arc<dyn ReleasePage>,
        extractor: Arc<dyn VersionExtractor>,
        store: Arc<dyn VersionStore>,
        notifier: Arc<dyn Notifier>,
        download_url: &str,
    ) -> Self {
        Self {
            page,
            extractor,
            store,
            notifier,
            download_url: download_url.to_string(),
        }
    }

    /// Run one release check, dating any new record with today's UTC date
    pub async fn run(&self) -> Result<WorkflowOutcome, WorkflowError> {
        self.run_on(Utc::now().date_naive()).await
    }

    /// Run one release check, dating any new record with `today`
    ///
    /// The webhook is posted before the store is touched. A failed post leaves
    /// the store unchanged so the next run retries; a failed write after a
    /// successful post means the next run notifies again.
    pub async fn run_on(&self, today: NaiveDate) -> Result<WorkflowOutcome, WorkflowError> {
        let page = self.page.fetch().await?;

        let version = self.extractor.extract(&page)?;
        info!("latest version: {}", version);

        if let Some(record) = self.store.get(&version).map_err(WorkflowError::StoreRead)? {
            info!(
                "current status matches latest: {} (recorded {})",
                record.version, record.date
            );
            return Ok(WorkflowOutcome::Unchanged { version });
        }

        info!("new version: {}", version);

        let message = release_message(&self.download_url, &version);
        self.notifier.notify(&message).await?;

        let record = VersionRecord {
            version: version.clone(),
            date: today.format("%Y-%m-%d").to_string(),
        };
        self.store
            .replace_all(&record)
            .inspect_err(|e| warn!("notified {} but failed to record it: {}", version, e))
            .map_err(|source| WorkflowError::StoreWrite {
                version: version.clone(),
                source,
            })?;

        Ok(WorkflowOutcome::Notified { version })
    }
}
