//! Guild membership, information and role management
//!
//! [`ActionDispatcher`] is the only path by which a management action reaches
//! the backend; it re-checks the permission matrix before every call.

mod dispatcher;
mod members;
mod service;
mod types;

pub use dispatcher::{ActionDispatcher, AutoConfirm, Confirmer, DispatchOutcome, Refusal};
#[cfg(test)]
pub use dispatcher::MockConfirmer;
pub use members::{MEMBERS_PATH, MemberDirectory};
pub use service::GuildService;
pub use types::{GuildInfo, GuildMember};
