//! Realtime fan-out port

use crate::events::RealtimeEvent;

/// Pushes an event to every currently connected client.
///
/// Delivery is fire-and-forget: no acknowledgment, no retry, no replay for
/// clients that connect later. Implementations must tolerate connects and
/// disconnects racing with an in-flight broadcast.
pub trait EventBroadcaster: Send + Sync {
    /// Broadcast an event, returning how many clients it was queued for
    fn broadcast(&self, event: &RealtimeEvent) -> usize;
}
