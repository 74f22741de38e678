//! # postboard-api
//!
//! HTTP server built with Axum: JSON endpoints, the two HTML pages, and the
//! `/ws` realtime channel.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server, spawn_seeder};
pub use state::AppState;
