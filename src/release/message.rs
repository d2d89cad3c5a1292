//! Notification text for a newly detected release

use crate::config::{MILESTONE_SEARCH_URL, PLATFORM_SUFFIX, RELEASE_NOTES_URL};
use crate::release::semver::{ReleaseKind, numeric_part, parse_version, release_kind};

/// Links embedded in a release notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseLinks {
    pub download: String,
    pub release_notes: String,
    pub milestone: String,
}

impl ReleaseLinks {
    /// Build the links for `version`, with downloads resolved against `download_url`
    ///
    /// Versions that don't parse as semver fall back to the major-release
    /// layout, using the raw identifier as the download file stem.
    pub fn new(download_url: &str, version: &str) -> Self {
        let Some(parsed) = parse_version(version) else {
            let numeric = numeric_part(version);
            return Self {
                download: format!("{}{}{}", download_url, version, PLATFORM_SUFFIX),
                release_notes: format!("{}#go{}", RELEASE_NOTES_URL, numeric),
                milestone: format!("{}Go{}", MILESTONE_SEARCH_URL, numeric),
            };
        };

        let major_minor = format!("{}.{}", parsed.major, parsed.minor);
        match release_kind(&parsed) {
            ReleaseKind::Minor => Self {
                download: format!("{}go{}{}", download_url, parsed, PLATFORM_SUFFIX),
                release_notes: format!("{}#go{}.minor", RELEASE_NOTES_URL, major_minor),
                milestone: format!(
                    "{}Go{}+label%3ACherryPickApproved+",
                    MILESTONE_SEARCH_URL, parsed
                ),
            },
            ReleaseKind::Major => Self {
                download: format!("{}go{}{}", download_url, major_minor, PLATFORM_SUFFIX),
                release_notes: format!("{}#go{}", RELEASE_NOTES_URL, major_minor),
                milestone: format!("{}Go{}", MILESTONE_SEARCH_URL, major_minor),
            },
        }
    }
}

/// Format the chat message announcing `version`
pub fn release_message(download_url: &str, version: &str) -> String {
    let links = ReleaseLinks::new(download_url, version);
    format!(
        "A new Go version [{}] is available, download for MacOS here: {} <Release Notes|{}> <Github Milestone|{}>",
        version, links.download, links.release_notes, links.milestone
    )
}
