//! Realtime events pushed to connected clients

mod realtime_event;

pub use realtime_event::{LikeUpdate, RealtimeEvent};
