//! Post database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for posts table
#[derive(Debug, Clone, FromRow)]
pub struct PostModel {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Post joined with author and viewer-relative like columns
#[derive(Debug, Clone, FromRow)]
pub struct PostViewModel {
    pub id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub username: String,
    pub is_author: bool,
    pub likes: i64,
    pub liked: bool,
}
