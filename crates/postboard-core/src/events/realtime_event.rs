//! Realtime events - state changes broadcast to every connected client
//!
//! Each event serializes to a `{"event": ..., "data": ...}` frame.

use serde::{Deserialize, Serialize};

use crate::entities::PostView;
use crate::value_objects::{LikeAction, PostId, UserId};

/// All events pushed over the realtime channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "snake_case")]
pub enum RealtimeEvent {
    /// A post was created by a user or by the seeder
    NewPost(PostView),
    /// A like was toggled
    LikeUpdate(LikeUpdate),
}

impl RealtimeEvent {
    /// Get the event name
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::NewPost(_) => "new_post",
            Self::LikeUpdate(_) => "like_update",
        }
    }
}

/// Payload of a `like_update` event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeUpdate {
    pub post_id: PostId,
    pub likes: i64,
    pub action: LikeAction,
    pub user_id: UserId,
}

impl LikeUpdate {
    pub fn new(post_id: PostId, likes: i64, action: LikeAction, user_id: UserId) -> Self {
        Self {
            post_id,
            likes,
            action,
            user_id,
        }
    }
}
