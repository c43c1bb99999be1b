//! Error handling for the client
//!
//! This module defines the error type used throughout the crate and the
//! extraction of display-ready messages from backend error bodies.

mod body;
mod helpers;
mod types;

pub use body::{ErrorBody, GENERIC_FAILURE_MESSAGE, extract_message};
pub use types::{ClientError, Result};
