//! Utility modules shared across the client

pub mod error;
pub mod logging;
pub mod validation;
