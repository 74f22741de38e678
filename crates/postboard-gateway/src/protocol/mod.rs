//! Realtime wire format

mod messages;

pub use messages::OutboundFrame;
