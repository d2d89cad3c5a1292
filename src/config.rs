use std::path::PathBuf;

use anyhow::{Context, Result};

// =============================================================================
// Release watch constants
// =============================================================================

/// Go download listing page
pub const DEFAULT_DOWNLOAD_URL: &str = "https://go.dev/dl/";

/// Store collection holding the version records
pub const COLLECTION: &str = "goversion";

/// Release notes page, anchored per release
pub const RELEASE_NOTES_URL: &str = "https://go.dev/doc/devel/release";

/// GitHub issue search filtered by milestone
pub const MILESTONE_SEARCH_URL: &str = "https://github.com/golang/go/issues?q=milestone%3A";

/// Platform variant that the notification links to
pub const PLATFORM_SUFFIX: &str = ".darwin-amd64.pkg";

// =============================================================================
// Environment variable names
// =============================================================================

pub const ENV_PORT: &str = "PORT";
pub const ENV_WEBHOOK_URL: &str = "SLACK_URL";
pub const ENV_PROJECT_ID: &str = "GOOGLE_CLOUD_PROJECT";
pub const ENV_DB_PATH: &str = "GOVERSION_DB_PATH";
pub const ENV_DOWNLOAD_URL: &str = "GOVERSION_DOWNLOAD_URL";
pub const ENV_LOG_FORMAT: &str = "GOVERSION_LOG_FORMAT";

/// Process configuration, read once at startup and passed by reference
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub webhook_url: String,
    pub project_id: String,
    pub db_path: PathBuf,
    pub download_url: String,
}

impl Config {
    /// Load configuration from environment variables (and `.env` when present)
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .with_context(|| format!("{} not found in environment", key))
        };

        let port = required(ENV_PORT)?
            .parse::<u16>()
            .with_context(|| format!("{} must be a valid port number", ENV_PORT))?;
        let webhook_url = required(ENV_WEBHOOK_URL)?;
        let project_id = required(ENV_PROJECT_ID)?;

        let db_path = lookup(ENV_DB_PATH)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| db_path(&project_id));

        let download_url = lookup(ENV_DOWNLOAD_URL)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_DOWNLOAD_URL.to_string());

        Ok(Self {
            port,
            webhook_url,
            project_id,
            db_path,
            download_url,
        })
    }
}

/// Returns the path to the data directory for goversion-notifier.
/// Uses $XDG_DATA_HOME/goversion-notifier if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/goversion-notifier,
/// or ./goversion-notifier if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the database file for a project.
pub fn db_path(project_id: &str) -> PathBuf {
    data_dir().join(format!("{}.db", project_id))
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("goversion-notifier")
}
