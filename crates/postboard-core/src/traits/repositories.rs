//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. No repository caches rows across calls:
//! every read goes back to the store.

use async_trait::async_trait;

use crate::entities::{Post, PostView, User};
use crate::error::DomainError;
use crate::value_objects::{LikeToggle, PostId, PostScope, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by exact username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Check if a username is already taken
    async fn username_exists(&self, username: &str) -> RepoResult<bool>;

    /// Create a new user, failing with `UsernameTaken` on a duplicate
    async fn create(&self, username: &str, password_hash: &str) -> RepoResult<User>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;
}

// ============================================================================
// Post Repository
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Insert a post
    async fn create(&self, user_id: UserId, content: &str) -> RepoResult<Post>;

    /// Find post by ID
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>>;

    /// List posts for a viewer, newest first, ties broken by id descending
    async fn list_views(&self, viewer: UserId, scope: PostScope) -> RepoResult<Vec<PostView>>;
}

// ============================================================================
// Like Repository
// ============================================================================

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Flip the like state for (user, post) and recount, atomically
    async fn toggle(&self, user_id: UserId, post_id: PostId) -> RepoResult<LikeToggle>;
}
