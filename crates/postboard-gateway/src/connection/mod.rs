//! Connection management
//!
//! Tracks open WebSocket connections and their outbound queues.

mod connection;
mod manager;

pub use connection::Connection;
pub use manager::{ConnectionManager, OUTBOUND_BUFFER_SIZE};
