//! Authentication session state
//!
//! The session starts in `Loading` when the store is created and from then on
//! moves between `Authenticated` and `Unauthenticated`. Only the request
//! pipeline, the action dispatcher and the auth/guild services write to it.

mod store;
mod types;

pub use store::SessionStore;
pub use types::{Identity, SessionState};
