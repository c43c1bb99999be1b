//! Authenticated request pipeline
//!
//! Every backend call goes through [`RequestPipeline`]: the ambient session
//! cookie is attached by the transport, an expired session is renewed at most
//! once per call, failures are normalized into [`ClientError`] and success
//! bodies are parsed leniently.
//!
//! [`ClientError`]: crate::utils::error::ClientError

mod navigation;
mod pipeline;
mod renewal;
mod response;
#[cfg(test)]
pub(crate) mod testing;
mod transport;

// Re-export public types and the main pipeline
pub use navigation::{InMemoryNavigator, Navigator, RedirectPolicy};
#[cfg(test)]
pub use navigation::MockNavigator;
pub use pipeline::{REFRESH_PATH, RequestPipeline};
pub use renewal::{RenewalGate, RenewalOutcome};
pub use response::{decode_payload, envelope_payload, parse_success_body, unwrap_payload};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
