//! Session record bound to an opaque client token

use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

/// Server-side session data stored under a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    /// Signed-in user
    pub user_id: UserId,
    /// Username at sign-in time
    pub username: String,
    /// Creation timestamp (Unix epoch seconds)
    pub created_at: i64,
}

impl SessionData {
    /// Create a new session for a user
    #[must_use]
    pub fn new(user_id: UserId, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}
