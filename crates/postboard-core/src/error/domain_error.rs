//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{PostId, UserId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Post not found")]
    PostNotFound(PostId),

    // =========================================================================
    // Rule Violations
    // =========================================================================
    #[error("Cannot like your own post")]
    SelfLike,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already exists")]
    UsernameTaken(String),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Session store error: {0}")]
    SessionError(String),
}

impl DomainError {
    /// Get an error code string for logs and diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PostNotFound(_) => "UNKNOWN_POST",

            // Rule
            Self::SelfLike => "SELF_LIKE",

            // Conflict
            Self::UsernameTaken(_) => "USERNAME_TAKEN",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::SessionError(_) => "SESSION_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::PostNotFound(_))
    }

    /// Check if the action is disallowed for this caller
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::SelfLike)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UsernameTaken(_))
    }

    /// Check if this error came from the persistence layer
    pub fn is_store_error(&self) -> bool {
        matches!(self, Self::DatabaseError(_) | Self::SessionError(_))
    }

    /// HTTP status for this error. A self-like is a bad request, not a 403.
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() {
            404
        } else if self.is_forbidden() {
            400
        } else if self.is_conflict() {
            409
        } else {
            500
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(DomainError::PostNotFound(1).code(), "UNKNOWN_POST");
        assert_eq!(DomainError::SelfLike.code(), "SELF_LIKE");
        assert_eq!(
            DomainError::UsernameTaken("alice".to_string()).code(),
            "USERNAME_TAKEN"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(DomainError::PostNotFound(1).status_code(), 404);
        assert_eq!(DomainError::SelfLike.status_code(), 400);
        assert_eq!(DomainError::SessionError("down".into()).status_code(), 500);
        assert_eq!(DomainError::UsernameTaken("a".into()).status_code(), 409);
        assert_eq!(DomainError::DatabaseError("boom".into()).status_code(), 500);
    }

    #[test]
    fn test_categories() {
        assert!(DomainError::UserNotFound(1).is_not_found());
        assert!(!DomainError::SelfLike.is_not_found());
        assert!(DomainError::SelfLike.is_forbidden());
        assert!(DomainError::DatabaseError("x".into()).is_store_error());
        assert!(DomainError::SessionError("x".into()).is_store_error());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(DomainError::PostNotFound(9).to_string(), "Post not found");
        assert_eq!(
            DomainError::SelfLike.to_string(),
            "Cannot like your own post"
        );
        assert_eq!(
            DomainError::UsernameTaken("alice".into()).to_string(),
            "Username already exists"
        );
    }
}
