//! Session storage in Redis.
//!
//! Each session is a JSON value under `session:<token>` that Redis expires.

use async_trait::async_trait;
use postboard_core::entities::SessionData;
use postboard_core::error::DomainError;
use postboard_core::traits::{RepoResult, SessionStore};
use redis::AsyncCommands;

use super::memory_session::MAX_SESSION_TTL;
use crate::pool::RedisPool;

/// Key prefix for sessions
pub const SESSION_KEY_PREFIX: &str = "session:";

fn store_error(e: impl std::fmt::Display) -> DomainError {
    DomainError::SessionError(e.to_string())
}

/// Redis-backed session store
#[derive(Clone)]
pub struct RedisSessionStore {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl RedisSessionStore {
    /// Sessions expire after `ttl_seconds`, clamped like the in-memory store
    #[must_use]
    pub fn new(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self {
            pool,
            ttl_seconds: ttl_seconds.clamp(1, MAX_SESSION_TTL.as_secs()),
        }
    }

    fn key(token: &str) -> String {
        format!("{SESSION_KEY_PREFIX}{token}")
    }

    fn decode(raw: &str) -> RepoResult<SessionData> {
        serde_json::from_str(raw).map_err(store_error)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn create(&self, token: &str, data: &SessionData) -> RepoResult<()> {
        let payload = serde_json::to_string(data).map_err(store_error)?;
        let mut conn = self.pool.get().await.map_err(store_error)?;

        conn.set_ex::<_, _, ()>(Self::key(token), payload, self.ttl_seconds)
            .await
            .map_err(store_error)?;

        tracing::debug!(user_id = data.user_id, "Stored session");
        Ok(())
    }

    async fn get(&self, token: &str) -> RepoResult<Option<SessionData>> {
        let mut conn = self.pool.get().await.map_err(store_error)?;
        let raw: Option<String> = conn.get(Self::key(token)).await.map_err(store_error)?;

        raw.as_deref().map(Self::decode).transpose()
    }

    async fn delete(&self, token: &str) -> RepoResult<bool> {
        let mut conn = self.pool.get().await.map_err(store_error)?;
        let deleted: i64 = conn.del(Self::key(token)).await.map_err(store_error)?;

        if deleted > 0 {
            tracing::debug!("Deleted session");
        }
        Ok(deleted > 0)
    }

    async fn ping(&self) -> RepoResult<()> {
        self.pool.health_check().await.map_err(store_error)
    }
}
