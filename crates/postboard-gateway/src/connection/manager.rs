//! Connection manager
//!
//! Holds every open connection in a `DashMap` and fans events out to all of
//! them.

use std::sync::Arc;

use dashmap::DashMap;
use postboard_core::{EventBroadcaster, RealtimeEvent, UserId};
use tokio::sync::mpsc::{self, error::TrySendError};

use super::Connection;
use crate::protocol::OutboundFrame;

/// Per-connection outbound queue capacity
pub const OUTBOUND_BUFFER_SIZE: usize = 100;

/// Manages all active WebSocket connections
pub struct ConnectionManager {
    /// Active connections by connection ID
    connections: DashMap<String, Arc<Connection>>,
}

impl ConnectionManager {
    /// Create a new connection manager
    #[must_use]
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
        }
    }

    /// Create a new connection manager wrapped in Arc
    #[must_use]
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Register a new connection
    pub fn add_connection(
        &self,
        user_id: Option<UserId>,
        sender: mpsc::Sender<OutboundFrame>,
    ) -> Arc<Connection> {
        let connection = Connection::new(Connection::generate_id(), user_id, sender);
        self.connections
            .insert(connection.connection_id().to_string(), connection.clone());

        tracing::debug!(
            connection_id = %connection.connection_id(),
            user_id = ?user_id,
            "Connection added"
        );

        connection
    }

    /// Remove a connection
    pub fn remove_connection(&self, connection_id: &str) -> bool {
        let removed = self.connections.remove(connection_id).is_some();
        if removed {
            tracing::debug!(connection_id = %connection_id, "Connection removed");
        }
        removed
    }

    /// Get the total number of active connections
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Queue a frame on every open connection
    ///
    /// A connection whose queue is full misses this frame. Connections whose
    /// send task has ended are dropped from the set.
    pub fn broadcast_frame(&self, frame: &OutboundFrame) -> usize {
        let mut sent = 0;
        let mut closed = Vec::new();

        for entry in &self.connections {
            match entry.try_send(frame.clone()) {
                Ok(()) => sent += 1,
                Err(TrySendError::Full(_)) => {
                    tracing::warn!(
                        connection_id = %entry.key(),
                        event = frame.event(),
                        "Outbound queue full, frame dropped"
                    );
                }
                Err(TrySendError::Closed(_)) => closed.push(entry.key().clone()),
            }
        }

        // Removing while iterating would deadlock the shard
        for connection_id in closed {
            self.remove_connection(&connection_id);
        }

        tracing::debug!(event = frame.event(), sent, "Frame broadcast to all connections");

        sent
    }

    /// Drop connections whose send task has ended
    ///
    /// Broadcast already drops them lazily; this catches ones that go quiet
    /// between events.
    pub fn cleanup_closed_connections(&self) -> usize {
        let before = self.connections.len();
        self.connections.retain(|_, conn| !conn.is_closed());
        let count = before.saturating_sub(self.connections.len());

        if count > 0 {
            tracing::info!(count, "Cleaned up closed connections");
        }

        count
    }
}

impl EventBroadcaster for ConnectionManager {
    fn broadcast(&self, event: &RealtimeEvent) -> usize {
        match OutboundFrame::from_event(event) {
            Ok(frame) => self.broadcast_frame(&frame),
            Err(e) => {
                tracing::error!(error = %e, event = event.event_type(), "Failed to serialize event");
                0
            }
        }
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConnectionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionManager")
            .field("connections", &self.connections.len())
            .finish()
    }
}
