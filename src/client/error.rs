//! Transport error types.

use thiserror::Error;

/// Result type alias for transport operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors raised by the HTTP transport.
#[derive(Debug, Error)]
pub enum ClientError {
    /// the configured base URL is unusable
    #[error("invalid base url: {0}")]
    InvalidUrl(String),

    /// a request was built with a verb/body combination the server cannot accept
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// connection-level failure (unreachable host, refused, timed out)
    #[error("network error: {0}")]
    Network(String),

    /// the server answered with a non-success status
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// JSON serialization of a request body failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// check if this error came back from the server rather than the network
    pub fn is_status(&self) -> bool {
        matches!(self, ClientError::Status { .. })
    }

    /// the HTTP status code, if the server answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
