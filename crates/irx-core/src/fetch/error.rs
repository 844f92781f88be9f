//! Errors from fetching and decoding a byte range.

use thiserror::Error;

/// Failure of a single range fetch. Never retried; never cached.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("error fetching endpoint: {url} with {status}")]
    Status { url: String, status: u32 },
    /// Curl reported an error (invalid URL, timeout, connection refused, ...).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// The body was not valid JSON.
    #[error("invalid JSON from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    /// The blocking transfer task panicked or was cancelled.
    #[error("fetch task for {url} did not complete: {source}")]
    Task {
        url: String,
        #[source]
        source: tokio::task::JoinError,
    },
}

impl FetchError {
    /// Resolved URL the failed request was sent to.
    pub fn url(&self) -> &str {
        match self {
            FetchError::Status { url, .. }
            | FetchError::Transport { url, .. }
            | FetchError::Parse { url, .. }
            | FetchError::Task { url, .. } => url,
        }
    }

    /// HTTP status, if the failure was a non-success response.
    pub fn status(&self) -> Option<u32> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
