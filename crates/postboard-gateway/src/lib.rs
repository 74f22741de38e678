//! # postboard-gateway
//!
//! WebSocket fan-out for realtime feed events. Every connected client receives
//! every `new_post` and `like_update` event published after it connected.

pub mod connection;
pub mod protocol;
pub mod server;

pub use connection::{Connection, ConnectionManager};
pub use protocol::OutboundFrame;
pub use server::{handle_socket, PING_INTERVAL};
