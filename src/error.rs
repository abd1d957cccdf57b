use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced by the fetch pipeline
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error for {endpoint}: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {} error for {}", status.as_u16(), endpoint)]
    HttpStatus { status: StatusCode, endpoint: String },

    #[error("Invalid JSON from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Session used after release")]
    UseAfterRelease,

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl FetchError {
    /// Endpoint the failure refers to, when there is one.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            FetchError::Transport { endpoint, .. }
            | FetchError::HttpStatus { endpoint, .. }
            | FetchError::Decode { endpoint, .. } => Some(endpoint),
            FetchError::UseAfterRelease | FetchError::ClientBuild(_) => None,
        }
    }
}
