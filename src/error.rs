//! Drift Error Types
//!
//! Error handling for the Drift API client.

use thiserror::Error;

/// Main error type for Drift client operations
#[derive(Debug, Error)]
pub enum DriftError {
    /// Configuration errors (missing token, unreadable config file, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// A request URI could not be built from the base URL and endpoint
    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    /// A header name or value is not valid on the wire
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Transport-level failure (connection, protocol, body read)
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a 4xx status
    #[error("Client error {status}: {body}")]
    Client { status: u16, body: String },

    /// The API answered with a 5xx status
    #[error("Server error {status}: {body}")]
    Server { status: u16, body: String },

    /// A request body could not be serialized
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error while loading configuration
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DriftError {
    /// HTTP status carried by the error, if the API produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            DriftError::Client { status, .. } | DriftError::Server { status, .. } => {
                Some(*status)
            }
            DriftError::Request(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the API rejected the request with 429 Too Many Requests
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(429)
    }
}

/// Result type alias for Drift client operations
pub type Result<T> = std::result::Result<T, DriftError>;
