//! WebSocket endpoint

mod handler;

pub use handler::{handle_socket, PING_INTERVAL};
