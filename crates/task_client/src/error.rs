//! Client error types.

use thiserror::Error;

/// Client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered 404.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The server answered 400.
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl ClientError {
    /// Returns true if the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ClientError::Deserialization(e.to_string())
        } else {
            ClientError::Network(e.to_string())
        }
    }
}
