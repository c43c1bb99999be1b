//! Common test utilities for senadb-client
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{TestBackend, fixtures};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let backend = TestBackend::start().await;
//!     let (client, navigator) = backend.client("/guild");
//!     // ...
//! }
//! ```

pub mod fixtures;

// Re-export commonly used items
pub use backend::TestBackend;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err and return the error
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
