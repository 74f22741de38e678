//! Integration test utilities for postboard
//!
//! This crate provides helpers for running end-to-end tests against
//! the HTTP API and the realtime channel.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
