//! # postboard-cache
//!
//! Session storage behind the `SessionStore` port.
//!
//! ## Features
//!
//! - **Redis sessions**: Shared across processes, expired by Redis TTL, over a
//!   deadpool-redis connection pool
//! - **Memory sessions**: Process-local fallback when no Redis is configured
//!
//! ## Example
//!
//! ```ignore
//! use postboard_cache::{MemorySessionStore, RedisPool, RedisPoolConfig, RedisSessionStore};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let sessions = RedisSessionStore::new(pool, 3600);
//!
//! let local = MemorySessionStore::new(3600);
//! ```

pub mod pool;
pub mod session;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

// Re-export session types
pub use session::{MemorySessionStore, RedisSessionStore, MAX_SESSION_TTL, SESSION_KEY_PREFIX};
