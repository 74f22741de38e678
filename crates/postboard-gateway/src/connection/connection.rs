//! Individual WebSocket connection

use std::sync::Arc;
use std::time::{Duration, Instant};

use postboard_core::UserId;
use tokio::sync::mpsc;

use crate::protocol::OutboundFrame;

/// One open realtime channel
pub struct Connection {
    /// Unique connection ID
    connection_id: String,

    /// Signed-in viewer, if the upgrade request carried a session
    user_id: Option<UserId>,

    /// Queue drained by the connection's send task
    sender: mpsc::Sender<OutboundFrame>,

    created_at: Instant,
}

impl Connection {
    /// Create a new connection
    pub fn new(
        connection_id: String,
        user_id: Option<UserId>,
        sender: mpsc::Sender<OutboundFrame>,
    ) -> Arc<Self> {
        Arc::new(Self {
            connection_id,
            user_id,
            sender,
            created_at: Instant::now(),
        })
    }

    /// Generate a fresh connection ID
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    pub fn connection_id(&self) -> &str {
        &self.connection_id
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    /// Queue a frame without waiting
    pub fn try_send(&self, frame: OutboundFrame) -> Result<(), mpsc::error::TrySendError<OutboundFrame>> {
        self.sender.try_send(frame)
    }

    /// Check if the send task has gone away
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Get connection age
    pub fn age(&self) -> Duration {
        self.created_at.elapsed()
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("connection_id", &self.connection_id)
            .field("user_id", &self.user_id)
            .field("age", &self.age())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postboard_core::{LikeAction, LikeUpdate, RealtimeEvent};

    fn frame() -> OutboundFrame {
        OutboundFrame::from_event(&RealtimeEvent::LikeUpdate(LikeUpdate::new(
            1,
            1,
            LikeAction::Liked,
            2,
        )))
        .unwrap()
    }

    #[tokio::test]
    async fn test_connection_creation() {
        let (tx, _rx) = mpsc::channel(10);
        let conn = Connection::new("conn1".to_string(), Some(5), tx);

        assert_eq!(conn.connection_id(), "conn1");
        assert_eq!(conn.user_id(), Some(5));
        assert!(!conn.is_closed());
    }

    #[tokio::test]
    async fn test_try_send_reaches_queue() {
        let (tx, mut rx) = mpsc::channel(10);
        let conn = Connection::new(Connection::generate_id(), None, tx);

        conn.try_send(frame()).unwrap();
        assert_eq!(rx.recv().await.unwrap(), frame());
    }

    #[tokio::test]
    async fn test_closed_when_receiver_dropped() {
        let (tx, rx) = mpsc::channel(10);
        let conn = Connection::new(Connection::generate_id(), None, tx);

        drop(rx);
        assert!(conn.is_closed());
        assert!(conn.try_send(frame()).is_err());
    }
}
