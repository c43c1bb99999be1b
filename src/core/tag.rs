//! Tag availability checks shared by user and guild tags

use crate::utils::error::{ClientError, Result};
use serde_json::Value;

/// Answer of a tag duplicate check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagCheck {
    Available,
    /// Rejected by the server, with its reason
    Taken(String),
}

impl TagCheck {
    pub fn is_available(&self) -> bool {
        matches!(self, TagCheck::Available)
    }

    /// Any success means available; a 4xx carries the reason it is not.
    /// An expired session stays an error.
    pub(crate) fn from_response(response: Result<Option<Value>>) -> Result<Self> {
        match response {
            Ok(_) => Ok(TagCheck::Available),
            Err(e @ ClientError::Request { .. }) if e.is_validation_or_conflict() => {
                Ok(TagCheck::Taken(e.user_message()))
            }
            Err(e) => Err(e),
        }
    }
}
