//! WebSocket handler
//!
//! Each socket gets a receive task and a send task; whichever ends first
//! tears the connection down. The send task's ping tick also sweeps
//! connections whose queues were abandoned.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use postboard_core::UserId;
use tokio::sync::mpsc;
use tokio::time::{interval, MissedTickBehavior};

use crate::connection::{ConnectionManager, OUTBOUND_BUFFER_SIZE};
use crate::protocol::OutboundFrame;

/// How often the server pings an idle client
pub const PING_INTERVAL: Duration = Duration::from_secs(30);

/// Serve an upgraded socket until either side goes away
pub async fn handle_socket(manager: Arc<ConnectionManager>, socket: WebSocket, viewer: Option<UserId>) {
    let (tx, mut rx) = mpsc::channel::<OutboundFrame>(OUTBOUND_BUFFER_SIZE);
    let connection = manager.add_connection(viewer, tx);
    let connection_id = connection.connection_id().to_string();

    tracing::info!(
        connection_id = %connection_id,
        user_id = ?connection.user_id(),
        "WebSocket connection established"
    );

    let (mut ws_sink, mut ws_stream) = socket.split();

    // Inbound text carries no meaning; the loop only watches for close
    let connection_id_recv = connection_id.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = ws_stream.next().await {
            match msg {
                Ok(Message::Close(_)) => {
                    tracing::info!(connection_id = %connection_id_recv, "Client closed connection");
                    return;
                }
                Ok(Message::Text(_) | Message::Binary(_)) => {
                    tracing::trace!(connection_id = %connection_id_recv, "Ignoring inbound message");
                }
                Ok(Message::Ping(_) | Message::Pong(_)) => {}
                Err(e) => {
                    tracing::warn!(connection_id = %connection_id_recv, error = %e, "WebSocket error");
                    return;
                }
            }
        }
    });

    let connection_id_send = connection_id.clone();
    let sweeper = manager.clone();
    let mut send_task = tokio::spawn(async move {
        let mut ping = interval(PING_INTERVAL);
        ping.set_missed_tick_behavior(MissedTickBehavior::Delay);
        ping.tick().await;

        loop {
            tokio::select! {
                frame = rx.recv() => {
                    let Some(frame) = frame else { break };
                    if ws_sink.send(Message::Text(frame.as_str().to_string())).await.is_err() {
                        tracing::warn!(connection_id = %connection_id_send, "Failed to send frame");
                        break;
                    }
                }
                _ = ping.tick() => {
                    sweeper.cleanup_closed_connections();
                    if ws_sink.send(Message::Ping(Vec::new())).await.is_err() {
                        break;
                    }
                }
            }
        }

        let _ = ws_sink.close().await;
    });

    tokio::select! {
        _ = &mut recv_task => {
            send_task.abort();
            tracing::debug!(connection_id = %connection_id, "Receive task ended");
        }
        _ = &mut send_task => {
            recv_task.abort();
            tracing::debug!(connection_id = %connection_id, "Send task ended");
        }
    }

    manager.remove_connection(&connection_id);
    tracing::info!(connection_id = %connection_id, "WebSocket connection closed");
}
