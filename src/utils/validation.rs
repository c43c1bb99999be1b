//! Input validation for user-supplied names, tags and codes
//!
//! These mirror the backend DTO constraints so obviously invalid input is
//! rejected before a request is sent. The server stays authoritative.

use crate::utils::error::{ClientError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Hangul syllables, ASCII letters and digits; no whitespace or symbols
static PLAIN_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[가-힣a-zA-Z0-9]+$").expect("static regex is valid"));

/// Length of a guild invite code
pub const INVITE_CODE_LEN: usize = 9;

/// Input validation utilities
pub struct InputValidator;

impl InputValidator {
    /// Nickname: 2-10 characters, no symbols
    pub fn validate_nickname(nickname: &str) -> Result<()> {
        Self::validate_length(nickname, 2, 10, "Nickname")?;
        Self::validate_plain_text(nickname, "Nickname")
    }

    /// User or guild tag: 1-8 characters, no symbols
    pub fn validate_tag(tag: &str) -> Result<()> {
        Self::validate_length(tag, 1, 8, "Tag")?;
        Self::validate_plain_text(tag, "Tag")
    }

    /// Guild name: 2-12 characters, no symbols
    pub fn validate_guild_name(name: &str) -> Result<()> {
        Self::validate_length(name, 2, 12, "Guild name")?;
        Self::validate_plain_text(name, "Guild name")
    }

    /// Invite code: exactly nine characters
    pub fn validate_invite_code(code: &str) -> Result<()> {
        if code.chars().count() != INVITE_CODE_LEN {
            return Err(ClientError::validation(format!(
                "Invite code must be {} characters.",
                INVITE_CODE_LEN
            )));
        }
        Ok(())
    }

    fn validate_length(value: &str, min: usize, max: usize, field: &str) -> Result<()> {
        let len = value.chars().count();
        if len < min || len > max {
            return Err(ClientError::validation(format!(
                "{} must be {}-{} characters.",
                field, min, max
            )));
        }
        Ok(())
    }

    fn validate_plain_text(value: &str, field: &str) -> Result<()> {
        if !PLAIN_TEXT.is_match(value) {
            return Err(ClientError::validation(format!(
                "{} may only contain letters and digits.",
                field
            )));
        }
        Ok(())
    }
}
