//! Session storage module.
//!
//! Two implementations of the core `SessionStore` port:
//! - Redis, for deployments that configure `REDIS_URL`
//! - an in-process map otherwise

mod memory_session;
mod redis_session;

pub use memory_session::{MemorySessionStore, MAX_SESSION_TTL};
pub use redis_session::{RedisSessionStore, SESSION_KEY_PREFIX};
