//! Integration tests for senadb-client
//!
//! These run the client over real HTTP against a local `wiremock` backend.

pub mod auth_flow_tests;
pub mod dispatcher_tests;
pub mod pipeline_tests;
