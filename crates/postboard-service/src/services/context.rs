//! Service context - dependency container for services
//!
//! Holds the repositories, session store, and realtime broadcaster.

use std::sync::Arc;

use postboard_core::traits::{
    EventBroadcaster, LikeRepository, PostRepository, SessionStore, UserRepository,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Every field is a trait object so the same services run against
/// PostgreSQL and Redis in production and in-memory fakes in tests.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    user_repo: Arc<dyn UserRepository>,
    post_repo: Arc<dyn PostRepository>,
    like_repo: Arc<dyn LikeRepository>,

    // Sessions
    session_store: Arc<dyn SessionStore>,

    // Realtime fan-out
    broadcaster: Arc<dyn EventBroadcaster>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        post_repo: Arc<dyn PostRepository>,
        like_repo: Arc<dyn LikeRepository>,
        session_store: Arc<dyn SessionStore>,
        broadcaster: Arc<dyn EventBroadcaster>,
    ) -> Self {
        Self {
            user_repo,
            post_repo,
            like_repo,
            session_store,
            broadcaster,
        }
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the like repository
    pub fn like_repo(&self) -> &dyn LikeRepository {
        self.like_repo.as_ref()
    }

    // === Sessions ===

    /// Get the session store
    pub fn session_store(&self) -> &dyn SessionStore {
        self.session_store.as_ref()
    }

    // === Realtime ===

    /// Get the realtime broadcaster
    pub fn broadcaster(&self) -> &dyn EventBroadcaster {
        self.broadcaster.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("session_store", &"...")
            .field("broadcaster", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    user_repo: Option<Arc<dyn UserRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    like_repo: Option<Arc<dyn LikeRepository>>,
    session_store: Option<Arc<dyn SessionStore>>,
    broadcaster: Option<Arc<dyn EventBroadcaster>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    pub fn like_repo(mut self, repo: Arc<dyn LikeRepository>) -> Self {
        self.like_repo = Some(repo);
        self
    }

    pub fn session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    pub fn broadcaster(mut self, broadcaster: Arc<dyn EventBroadcaster>) -> Self {
        self.broadcaster = Some(broadcaster);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Internal` if any dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        let missing = |name: &str| ServiceError::internal(format!("{name} is required"));

        Ok(ServiceContext::new(
            self.user_repo.ok_or_else(|| missing("user_repo"))?,
            self.post_repo.ok_or_else(|| missing("post_repo"))?,
            self.like_repo.ok_or_else(|| missing("like_repo"))?,
            self.session_store.ok_or_else(|| missing("session_store"))?,
            self.broadcaster.ok_or_else(|| missing("broadcaster"))?,
        ))
    }
}
