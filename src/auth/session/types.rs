//! Session data types

use crate::auth::rbac::Role;
use crate::sdk::client::{envelope_payload, unwrap_payload};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Authenticated user as issued by the backend
///
/// Wire shape is the access-token payload: `{ sub, userRole, guildId, guildRole }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "sub", alias = "userId")]
    pub user_id: String,
    /// Account-level role (`admin` / `user`), unrelated to guild rank
    #[serde(rename = "userRole", default, skip_serializing_if = "Option::is_none")]
    pub account_role: Option<String>,
    #[serde(rename = "guildId", default)]
    pub guild_id: Option<String>,
    #[serde(rename = "guildRole", alias = "role", default)]
    pub role: Option<Role>,
}

impl Identity {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            account_role: None,
            guild_id: None,
            role: None,
        }
    }

    pub fn in_guild(mut self, guild_id: impl Into<String>, role: Role) -> Self {
        self.guild_id = Some(guild_id.into());
        self.role = Some(role);
        self
    }

    pub fn has_guild(&self) -> bool {
        self.guild_id.is_some()
    }

    /// Identity carried in a `{ payload }` envelope
    ///
    /// Action responses only re-issue the identity inside the envelope; a
    /// bare body is never read as one.
    pub fn from_envelope(value: &Value) -> Option<Self> {
        envelope_payload(value).and_then(|payload| Self::deserialize(payload).ok())
    }

    /// Identity from an enveloped or bare body
    pub fn from_body(value: Value) -> Option<Self> {
        serde_json::from_value(unwrap_payload(value)).ok()
    }
}

/// Authentication state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Loading,
    Authenticated(Identity),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn identity(&self) -> Option<&Identity> {
        match self {
            SessionState::Authenticated(identity) => Some(identity),
            _ => None,
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            SessionState::Unauthenticated => "unauthenticated",
            SessionState::Loading => "loading",
            SessionState::Authenticated(_) => "authenticated",
        }
    }
}
