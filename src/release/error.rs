use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected status: {0}")]
    Status(StatusCode),
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no version found in download page")]
    NotFound,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Database lock poisoned")]
    LockPoisoned,
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("unable to post webhook message: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("non-200 webhook response: {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Terminal failure of a single release check
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("unable to fetch download page: {0}")]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error("unable to fetch version record: {0}")]
    StoreRead(#[source] StoreError),

    #[error(transparent)]
    NotifyTransport(NotifyError),

    #[error(transparent)]
    NotifyStatus(NotifyError),

    #[error("unable to write new version {version}: {source}")]
    StoreWrite {
        version: String,
        #[source]
        source: StoreError,
    },
}

impl From<NotifyError> for WorkflowError {
    fn from(err: NotifyError) -> Self {
        match err {
            NotifyError::Transport(_) => WorkflowError::NotifyTransport(err),
            NotifyError::Status { .. } => WorkflowError::NotifyStatus(err),
        }
    }
}
