//! Error types for native record decoding

use thiserror::Error;

/// Result type for native envelope operations
pub type Result<T> = std::result::Result<T, NativeError>;

/// Errors raised while moving native records in and out of the JSON envelope.
///
/// Mapping native records to presentation records never fails; only the
/// byte-level envelope can.
#[derive(Debug, Error)]
pub enum NativeError {
    /// Payload contained no data
    #[error("Empty native payload")]
    EmptyPayload,

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for NativeError {
    fn from(err: serde_json::Error) -> Self {
        NativeError::SerializationError(err.to_string())
    }
}
