//! Guild role and management action definitions

use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::warn;

/// Guild role, ordered by rank (`Member < Manager < Submaster < Master`)
///
/// Parsed case-insensitively once, at the deserialization boundary, and
/// serialized in the backend's lowercase form. A role string this client does
/// not know decodes as `Member`, which is granted nothing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(from = "String", into = "String")]
pub enum Role {
    #[default]
    Member,
    Manager,
    Submaster,
    Master,
}

/// Role string that matches no guild role
#[derive(Debug, Clone, Error)]
#[error("unknown guild role: {0}")]
pub struct UnknownRole(pub String);

impl Role {
    /// All roles, highest rank first
    pub const ALL: [Role; 4] = [Role::Master, Role::Submaster, Role::Manager, Role::Member];

    /// Backend representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Master => "master",
            Role::Submaster => "submaster",
            Role::Manager => "manager",
            Role::Member => "member",
        }
    }

    /// MASTER and SUBMASTER may open the guild management menu
    pub fn is_guild_admin(&self) -> bool {
        matches!(self, Role::Master | Role::Submaster)
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "master" => Ok(Role::Master),
            "submaster" => Ok(Role::Submaster),
            "manager" => Ok(Role::Manager),
            "member" => Ok(Role::Member),
            _ => Err(UnknownRole(s.to_string())),
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        value.parse().unwrap_or_else(|UnknownRole(role)| {
            warn!(%role, "Unknown guild role, treating as member");
            Role::Member
        })
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_ascii_uppercase())
    }
}

/// Guild management action performed on a target member
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ManagementAction {
    /// Hand the MASTER role to the target; the actor becomes SUBMASTER
    DelegateMaster,
    AppointSubmaster,
    /// Hand the SUBMASTER role to a manager
    DelegateSubmaster,
    AppointManager,
    DemoteManager,
    /// Remove the target from the guild
    Kick,
}

/// Backend operation a management action maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagementRoute {
    pub method: Method,
    pub path: &'static str,
}

impl ManagementAction {
    pub const ALL: [ManagementAction; 6] = [
        ManagementAction::DelegateMaster,
        ManagementAction::AppointSubmaster,
        ManagementAction::DelegateSubmaster,
        ManagementAction::AppointManager,
        ManagementAction::DemoteManager,
        ManagementAction::Kick,
    ];

    /// Human-readable label used in confirmation prompts
    pub fn label(&self) -> &'static str {
        match self {
            ManagementAction::DelegateMaster => "Delegate guild master",
            ManagementAction::AppointSubmaster => "Appoint submaster",
            ManagementAction::DelegateSubmaster => "Delegate submaster",
            ManagementAction::AppointManager => "Appoint manager",
            ManagementAction::DemoteManager => "Demote manager",
            ManagementAction::Kick => "Kick from guild",
        }
    }

    /// Endpoint and method; the body is always `{ "targetId": .. }`
    pub fn route(&self) -> ManagementRoute {
        let (method, path) = match self {
            ManagementAction::DelegateMaster => (Method::PATCH, "/guild/management/master"),
            ManagementAction::AppointSubmaster | ManagementAction::DelegateSubmaster => {
                (Method::PATCH, "/guild/management/submaster")
            }
            ManagementAction::AppointManager => (Method::POST, "/guild/management/managers"),
            ManagementAction::DemoteManager => (Method::PATCH, "/guild/management/managers"),
            ManagementAction::Kick => (Method::PATCH, "/guild/management/kick"),
        };
        ManagementRoute { method, path }
    }
}

impl FromStr for ManagementAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        ManagementAction::ALL
            .into_iter()
            .find(|action| format!("{:?}", action).to_ascii_lowercase() == normalized)
            .ok_or_else(|| format!("unknown management action: {}", s))
    }
}

impl fmt::Display for ManagementAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
