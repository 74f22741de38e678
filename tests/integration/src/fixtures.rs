//! Test fixtures and data generators

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
///
/// Includes a timestamp so reruns against the same database do not collide.
pub fn unique_suffix() -> String {
    format!(
        "{}_{}",
        chrono::Utc::now().timestamp_micros(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    )
}

/// Signup and signin request body
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn unique(prefix: &str) -> Self {
        Self {
            username: format!("{prefix}_{}", unique_suffix()),
            password: "pw1".to_string(),
        }
    }
}

/// Create post request body
#[derive(Debug, Serialize)]
pub struct NewPost<'a> {
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Deserialize)]
pub struct SigninBody {
    pub message: String,
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostBody {
    pub id: i64,
    pub content: String,
    pub created_at: String,
    pub username: String,
    #[serde(rename = "isAuthor")]
    pub is_author: bool,
    pub likes: i64,
    pub liked: bool,
}

#[derive(Debug, Deserialize)]
pub struct LikeBody {
    pub message: String,
    pub likes: i64,
}
