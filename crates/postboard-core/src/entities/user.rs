//! User entity - a registered account

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// User entity. Usernames are unique and case-sensitive as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User
    pub fn new(id: UserId, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            created_at: Utc::now(),
        }
    }

    /// Check whether this user is the given viewer
    #[inline]
    pub fn is(&self, viewer: UserId) -> bool {
        self.id == viewer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_creation() {
        let user = User::new(7, "alice");
        assert_eq!(user.id, 7);
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn test_is_viewer() {
        let user = User::new(7, "alice");
        assert!(user.is(7));
        assert!(!user.is(8));
    }
}
