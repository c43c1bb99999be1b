//! Test fixtures
//!
//! Wire bodies as the backend sends them.

use senadb_client::Role;
use senadb_client::core::guild::GuildMember;
use serde_json::{Value, json};

pub const MASTER_ID: &str = "u-master";
pub const GUILD_ID: &str = "g-1";

/// Token payload; a role implies membership of [`GUILD_ID`]
pub fn identity_body(user_id: &str, role: Option<&str>) -> Value {
    json!({
        "sub": user_id,
        "userRole": "user",
        "guildId": role.map(|_| GUILD_ID),
        "guildRole": role,
    })
}

/// `{ payload: .. }` envelope
pub fn envelope(payload: Value) -> Value {
    json!({ "payload": payload })
}

pub fn member_body(user_id: &str, role: &str) -> Value {
    json!({
        "userId": user_id,
        "nickname": user_id.trim_start_matches("u-"),
        "tag": "KR",
        "role": role,
    })
}

pub fn member(user_id: &str, role: Role) -> GuildMember {
    GuildMember::new(user_id, user_id.trim_start_matches("u-"), role)
}
