//! Helper functions for creating and classifying errors

use super::types::ClientError;

impl ClientError {
    pub fn request<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Request {
            status,
            message: message.into(),
        }
    }

    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network(message.into())
    }

    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn unexpected_response<S: Into<String>>(message: S) -> Self {
        Self::UnexpectedResponse(message.into())
    }

    /// HTTP status of a failed request, if the failure came from the server
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Request { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// 4xx response (validation, conflict, a 401 after renewal)
    pub fn is_validation_or_conflict(&self) -> bool {
        matches!(self.status(), Some(400..=499))
    }

    /// 5xx response
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(500..=599))
    }

    /// The request never produced an HTTP response
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::Timeout(_) | Self::Cancelled
        )
    }

    /// Message shown to the user when an operation fails
    pub fn user_message(&self) -> String {
        match self {
            Self::Request { message, .. } | Self::Validation(message) => message.clone(),
            Self::Timeout(_) => "The server took too long to respond.".to_string(),
            Self::Network(_) => "Could not reach the server.".to_string(),
            Self::Cancelled => "The request was cancelled.".to_string(),
            other => other.to_string(),
        }
    }
}
