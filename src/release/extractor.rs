//! Version extraction from the download listing page

#[cfg(test)]
use mockall::automock;

use crate::release::error::ExtractError;

/// Trait for deriving the latest release identifier from a listing page
#[cfg_attr(test, automock)]
pub trait VersionExtractor: Send + Sync {
    /// Returns the version of the first matching listing entry
    fn extract(&self, page: &str) -> Result<String, ExtractError>;
}

/// Substring-based extractor matching a single download link per line
///
/// The listing page puts the newest release first, so the first line
/// carrying both markers is the latest release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerExtractor {
    marker: String,
    platform: String,
    prefix: String,
    suffix: String,
}

impl MarkerExtractor {
    pub fn new(marker: &str, platform: &str, prefix: &str, suffix: &str) -> Self {
        Self {
            marker: marker.to_string(),
            platform: platform.to_string(),
            prefix: prefix.to_string(),
            suffix: suffix.to_string(),
        }
    }

    fn matches(&self, line: &str) -> bool {
        line.contains(&self.marker) && line.contains(&self.platform)
    }

    fn strip<'a>(&self, line: &'a str) -> &'a str {
        let line = line.trim();
        let line = line.strip_suffix(self.suffix.as_str()).unwrap_or(line);
        line.strip_prefix(self.prefix.as_str()).unwrap_or(line)
    }
}

impl Default for MarkerExtractor {
    /// Matches the featured macOS amd64 installer on https://go.dev/dl/
    fn default() -> Self {
        Self::new(
            "downloadBox",
            "darwin-amd64.pkg",
            r#"<a class="download downloadBox" href="/dl/"#,
            r#".darwin-amd64.pkg">"#,
        )
    }
}

impl VersionExtractor for MarkerExtractor {
    fn extract(&self, page: &str) -> Result<String, ExtractError> {
        page.lines()
            .find(|line| self.matches(line))
            .map(|line| self.strip(line))
            .filter(|version| !version.is_empty())
            .map(str::to_string)
            .ok_or(ExtractError::NotFound)
    }
}
