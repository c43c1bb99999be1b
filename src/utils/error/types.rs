//! Error types for the client

use thiserror::Error;

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, ClientError>;

/// Main error type for the client
///
/// Everything above the request pipeline only ever sees one of these, with a
/// message that can be shown to a user as-is.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Non-success HTTP response, carrying the message extracted from the body
    #[error("{message}")]
    Request { status: u16, message: String },

    /// Transport-level failures (connection refused, DNS, TLS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// Request exceeded the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Credential renewal was rejected; the session has been cleared
    #[error("Your session has expired. Please sign in again.")]
    SessionExpired,

    /// The caller cancelled the request before it completed
    #[error("Request cancelled")]
    Cancelled,

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local input validation failed, no request was sent
    #[error("{0}")]
    Validation(String),

    /// A success response did not carry the payload the caller needs
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ClientError::Timeout(error.to_string())
        } else {
            ClientError::Network(error.to_string())
        }
    }
}
