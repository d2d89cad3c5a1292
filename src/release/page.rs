//! Download listing page fetcher

#[cfg(test)]
use mockall::automock;

use tracing::warn;

use crate::release::error::FetchError;

/// Trait for fetching the raw text of a release listing page
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ReleasePage: Send + Sync {
    /// Fetches the listing page body
    ///
    /// # Returns
    /// * `Ok(String)` - The response body, scanned line by line by the extractor
    /// * `Err(FetchError)` - Transport failure or non-2xx status
    async fn fetch(&self) -> Result<String, FetchError>;
}

/// Listing page served over HTTP (https://go.dev/dl/ by default)
pub struct GoDownloadPage {
    client: reqwest::Client,
    url: String,
}

impl GoDownloadPage {
    pub fn new(client: reqwest::Client, url: &str) -> Self {
        Self {
            client,
            url: url.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl ReleasePage for GoDownloadPage {
    async fn fetch(&self) -> Result<String, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .inspect_err(|e| warn!("Failed to fetch {}: {}", self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Download page returned status {}: {}", status, self.url);
            return Err(FetchError::Status(status));
        }

        Ok(response.text().await?)
    }
}
