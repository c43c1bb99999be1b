//! Backend access layer
//!
//! Everything that talks HTTP lives under [`client`]. Services in
//! [`crate::auth`] and [`crate::core`] hold an `Arc<RequestPipeline>` and never
//! see a status code.

pub mod client;

// Re-exports for convenience
pub use client::{
    ApiRequest, ApiResponse, HttpTransport, InMemoryNavigator, Navigator, RedirectPolicy,
    RequestPipeline, Transport,
};
