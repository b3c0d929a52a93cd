//! Error types for the forecast client.

use thiserror::Error;

/// Failure to obtain a usable response from the backend.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request never produced a response (connection, DNS, TLS, ...).
    #[error("request failed before a response arrived: {0}")]
    Network(#[from] reqwest::Error),

    /// A response arrived but its body did not match the envelope contract.
    #[error("response body could not be decoded: {0}")]
    Decode(String),
}

impl TransportError {
    /// User-friendly message for UI display.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network(_) => "Network error. Check your connection.",
            Self::Decode(_) => "The server sent an unexpected response.",
        }
    }
}
