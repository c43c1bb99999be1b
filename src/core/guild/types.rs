//! Guild wire types

use crate::auth::rbac::Role;
use serde::{Deserialize, Deserializer, Serialize};

/// One row of the member list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildMember {
    pub user_id: String,
    pub nickname: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// A member the backend sends without a role is a plain member
    #[serde(default, deserialize_with = "role_or_member")]
    pub role: Role,
}

fn role_or_member<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Role>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl GuildMember {
    pub fn new(user_id: impl Into<String>, nickname: impl Into<String>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            nickname: nickname.into(),
            tag: String::new(),
            full_name: None,
            role,
        }
    }

    /// `fullName` when the backend sends one, otherwise `nickname#tag`
    pub fn display_name(&self) -> String {
        match &self.full_name {
            Some(full_name) => full_name.clone(),
            None if self.tag.is_empty() => self.nickname.clone(),
            None => format!("{}#{}", self.nickname, self.tag),
        }
    }
}

/// Guild overview shown on the guild page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub notice: Option<String>,
}
