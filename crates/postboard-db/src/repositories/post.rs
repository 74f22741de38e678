//! PostgreSQL implementation of PostRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use postboard_core::entities::{Post, PostView};
use postboard_core::traits::{PostRepository, RepoResult};
use postboard_core::value_objects::{PostId, PostScope, UserId};

use crate::models::{PostModel, PostViewModel};

use super::error::map_db_error;

/// Viewer-relative projection; `$1` is always the viewer id
const VIEW_SELECT: &str = r"
    SELECT p.id, p.content, p.created_at, u.username,
           (p.user_id = $1) AS is_author,
           (SELECT COUNT(*) FROM likes l WHERE l.post_id = p.id) AS likes,
           EXISTS(SELECT 1 FROM likes l WHERE l.post_id = p.id AND l.user_id = $1) AS liked
    FROM posts p
    JOIN users u ON u.id = p.user_id
";

const VIEW_ORDER: &str = "ORDER BY p.created_at DESC, p.id DESC";

fn scope_filter(scope: PostScope) -> &'static str {
    match scope {
        PostScope::All => "",
        PostScope::Mine => "WHERE p.user_id = $1",
        PostScope::Liked => {
            "WHERE EXISTS(SELECT 1 FROM likes l WHERE l.post_id = p.id AND l.user_id = $1)"
        }
    }
}

/// PostgreSQL implementation of PostRepository
#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    /// Create a new PgPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PostRepository for PgPostRepository {
    #[instrument(skip(self, content))]
    async fn create(&self, user_id: UserId, content: &str) -> RepoResult<Post> {
        let model = sqlx::query_as::<_, PostModel>(
            r"
            INSERT INTO posts (user_id, content)
            VALUES ($1, $2)
            RETURNING id, user_id, content, created_at
            ",
        )
        .bind(user_id)
        .bind(content)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Post::from(model))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: PostId) -> RepoResult<Option<Post>> {
        let result = sqlx::query_as::<_, PostModel>(
            r"
            SELECT id, user_id, content, created_at
            FROM posts
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Post::from))
    }

    #[instrument(skip(self))]
    async fn list_views(&self, viewer: UserId, scope: PostScope) -> RepoResult<Vec<PostView>> {
        let sql = format!("{VIEW_SELECT} {} {VIEW_ORDER}", scope_filter(scope));

        let results = sqlx::query_as::<_, PostViewModel>(&sql)
            .bind(viewer)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(results.into_iter().map(PostView::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgPostRepository>();
    }

    #[test]
    fn test_scope_filters_bind_viewer_only() {
        assert_eq!(scope_filter(PostScope::All), "");
        assert!(scope_filter(PostScope::Mine).contains("p.user_id = $1"));
        assert!(scope_filter(PostScope::Liked).contains("l.user_id = $1"));
        assert!(!scope_filter(PostScope::Liked).contains("$2"));
    }
}
