//! Realtime upgrade handler

use axum::{extract::State, extract::WebSocketUpgrade, response::Response};
use postboard_gateway::handle_socket;

use crate::extractors::OptionalSessionUser;
use crate::state::AppState;

/// Upgrade to the realtime channel
///
/// GET /ws
///
/// Signed-out clients may listen too; the session only labels the
/// connection in logs.
pub async fn realtime(
    State(state): State<AppState>,
    OptionalSessionUser(user): OptionalSessionUser,
    ws: WebSocketUpgrade,
) -> Response {
    let viewer = user.map(|u| u.user_id());
    let connections = state.connections().clone();

    ws.on_upgrade(move |socket| handle_socket(connections, socket, viewer))
}
