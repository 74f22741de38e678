//! Process-local session storage

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use postboard_core::entities::SessionData;
use postboard_core::traits::{RepoResult, SessionStore};

/// Longest lifetime a session can be given; larger TTLs are clamped
pub const MAX_SESSION_TTL: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

#[derive(Debug, Clone)]
struct Entry {
    data: SessionData,
    expires_at: Instant,
}

/// In-memory session store; sessions are lost on restart
#[derive(Debug, Clone)]
pub struct MemorySessionStore {
    sessions: Arc<DashMap<String, Entry>>,
    ttl: Duration,
}

impl MemorySessionStore {
    /// Create a store whose sessions live for `ttl_seconds`, at most
    /// [`MAX_SESSION_TTL`]
    #[must_use]
    pub fn new(ttl_seconds: u64) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            ttl: Duration::from_secs(ttl_seconds).min(MAX_SESSION_TTL),
        }
    }

    /// Number of stored sessions, including expired ones not yet evicted
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drop every expired session
    ///
    /// The returned count is approximate when other tasks insert while the
    /// sweep runs.
    pub fn evict_expired(&self) -> usize {
        let now = Instant::now();
        let before = self.sessions.len();
        self.sessions.retain(|_, entry| entry.expires_at > now);
        before.saturating_sub(self.sessions.len())
    }

    fn expiry_from(&self, now: Instant) -> Instant {
        now.checked_add(self.ttl)
            .or_else(|| now.checked_add(MAX_SESSION_TTL))
            .unwrap_or(now)
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn create(&self, token: &str, data: &SessionData) -> RepoResult<()> {
        self.evict_expired();
        self.sessions.insert(
            token.to_string(),
            Entry {
                data: data.clone(),
                expires_at: self.expiry_from(Instant::now()),
            },
        );
        Ok(())
    }

    async fn get(&self, token: &str) -> RepoResult<Option<SessionData>> {
        let now = Instant::now();
        let found = self
            .sessions
            .get(token)
            .map(|entry| (entry.expires_at > now).then(|| entry.data.clone()));

        match found {
            Some(Some(data)) => Ok(Some(data)),
            Some(None) => {
                self.sessions.remove(token);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, token: &str) -> RepoResult<bool> {
        Ok(self.sessions.remove(token).is_some())
    }

    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}
