//! Backend error body handling
//!
//! Error responses look like `{ "message": "..." }` or
//! `{ "message": ["...", "..."] }` (validation pipes report one entry per
//! failed constraint). Anything else falls back to a generic message.

use serde::Deserialize;
use serde_json::Value;

/// Message used when the error body carries nothing usable
pub const GENERIC_FAILURE_MESSAGE: &str = "API request failed.";

/// Backend error body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<ErrorMessage>,
}

/// `message` field of an error body
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    List(Vec<String>),
    Text(String),
    Other(Value),
}

impl ErrorBody {
    /// Parse a raw body; anything but a JSON object yields an empty body
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(mut fields)) => Self {
                message: fields
                    .remove("message")
                    .and_then(|message| serde_json::from_value(message).ok()),
            },
            _ => Self::default(),
        }
    }

    pub fn into_message(self) -> String {
        match self.message {
            Some(ErrorMessage::List(items)) if !items.is_empty() => items.join(", "),
            Some(ErrorMessage::Text(text)) if !text.is_empty() => text,
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Extract a display-ready message from a raw error body
pub fn extract_message(raw: &str) -> String {
    ErrorBody::parse(raw).into_message()
}
