//! Authentication and authorization
//!
//! [`session`] holds who is signed in, [`rbac`] decides what a guild role may
//! do to another, and [`AuthService`] drives the session endpoints.

pub mod rbac;
mod service;
pub mod session;

pub use rbac::{ManagementAction, PermissionMatrix, Role};
pub use service::{AuthService, LOGIN_PATH, LOGOUT_PATH, PROFILE_PATH, REGISTER_PATH};
pub use session::{Identity, SessionState, SessionStore};
