//! Guild role-based action authorization
//!
//! This module decides which management actions an actor may perform on a
//! target member, based only on their guild roles.

mod matrix;
mod types;

// Re-export public types and structs
pub use matrix::{ActionSet, PermissionMatrix, allowed_actions};
pub use types::{ManagementAction, ManagementRoute, Role, UnknownRole};
