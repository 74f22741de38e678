//! Post entity and its viewer-relative read model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{PostId, UserId};

/// Post entity - a short text authored by exactly one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post
    pub fn new(id: PostId, user_id: UserId, content: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            content: content.into(),
            created_at: Utc::now(),
        }
    }

    /// Check if the given user authored this post
    #[inline]
    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// A post joined with its author and live like aggregate, as seen by one viewer.
///
/// This is the shape returned by the listing endpoints and pushed in
/// `new_post` events, so field names follow the JSON wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostView {
    pub id: PostId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Author username
    pub username: String,
    /// Whether the viewer wrote this post
    #[serde(rename = "isAuthor")]
    pub is_author: bool,
    /// Like count computed at read time
    pub likes: i64,
    /// Whether the viewer currently likes this post
    pub liked: bool,
}

impl PostView {
    /// Build the view of a freshly created post: no likes yet
    pub fn fresh(post: &Post, username: impl Into<String>, is_author: bool) -> Self {
        Self {
            id: post.id,
            content: post.content.clone(),
            created_at: post.created_at,
            username: username.into(),
            is_author,
            likes: 0,
            liked: false,
        }
    }
}
