//! Outbound frame format
//!
//! Events are serialized once per broadcast and the resulting text is shared
//! by every connection's queue.

use std::fmt;
use std::sync::Arc;

use postboard_core::RealtimeEvent;

/// A serialized `{"event": ..., "data": ...}` text frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundFrame {
    event: &'static str,
    text: Arc<str>,
}

impl OutboundFrame {
    /// Serialize an event into a frame
    pub fn from_event(event: &RealtimeEvent) -> Result<Self, serde_json::Error> {
        let text = serde_json::to_string(event)?;
        Ok(Self {
            event: event.event_type(),
            text: text.into(),
        })
    }

    /// Event name, e.g. `new_post`
    pub fn event(&self) -> &'static str {
        self.event
    }

    /// JSON text sent to the client
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for OutboundFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} bytes)", self.event, self.text.len())
    }
}
