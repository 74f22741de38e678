//! Session storage port

use async_trait::async_trait;

use crate::entities::SessionData;

use super::RepoResult;

/// Server-side session storage keyed by an opaque token
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a session under a token
    async fn create(&self, token: &str, data: &SessionData) -> RepoResult<()>;

    /// Look up a live session
    async fn get(&self, token: &str) -> RepoResult<Option<SessionData>>;

    /// Remove a session, returning whether it existed
    async fn delete(&self, token: &str) -> RepoResult<bool>;

    /// Check the backing store is reachable
    async fn ping(&self) -> RepoResult<()>;
}
