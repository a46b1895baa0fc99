//! Integration test utilities for the guild API
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API and the client view-model.


pub use fixtures::*;
pub use helpers::*;
