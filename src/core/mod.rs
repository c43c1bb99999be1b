//! Guild client features
//!
//! Each service wraps the shared [`RequestPipeline`] and is cheap to clone.
//!
//! [`RequestPipeline`]: crate::sdk::client::RequestPipeline

pub mod archive;
pub mod guild;
mod tag;
pub mod user;

pub use archive::ArchiveService;
pub use guild::{ActionDispatcher, GuildService, MemberDirectory};
pub use tag::TagCheck;
pub use user::{UserProfile, UserService};
