//! Transaction error types.

use thiserror::Error;

use crate::client::ClientError;
use crate::types::InvalidNameError;

/// Result type for transaction operations.
pub type TransactionResult<T> = Result<T, TransactionError>;

/// Errors that can occur while building or submitting a transaction.
#[derive(Debug, Error)]
pub enum TransactionError {
    /// The transport call failed or the server answered non-2xx. Propagated
    /// verbatim; the batch performs no retries.
    #[error("submission failed: {0}")]
    Client(#[from] ClientError),

    /// A wire payload could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An operation was constructed with an empty name or identifier.
    #[error("invalid name: {0}")]
    InvalidName(#[from] InvalidNameError),
}

impl TransactionError {
    /// check if this error came back from the transport rather than a codec
    pub fn is_submission(&self) -> bool {
        matches!(self, TransactionError::Client(_))
    }
}
