//! PostgreSQL implementation of LikeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use postboard_core::traits::{LikeRepository, RepoResult};
use postboard_core::value_objects::{LikeAction, LikeToggle, PostId, UserId};

use super::error::{map_db_error, map_missing_post};

/// PostgreSQL implementation of LikeRepository
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    /// Create a new PgLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    /// Delete-or-insert and recount inside one transaction.
    ///
    /// Two concurrent toggles by the same user serialize on the primary key,
    /// so the pair always lands in a consistent state.
    #[instrument(skip(self))]
    async fn toggle(&self, user_id: UserId, post_id: PostId) -> RepoResult<LikeToggle> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let removed = sqlx::query_scalar::<_, i64>(
            r"
            DELETE FROM likes WHERE user_id = $1 AND post_id = $2
            RETURNING post_id
            ",
        )
        .bind(user_id)
        .bind(post_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let action = if removed.is_some() {
            LikeAction::Unliked
        } else {
            sqlx::query(
                r"
                INSERT INTO likes (user_id, post_id)
                VALUES ($1, $2)
                ON CONFLICT (user_id, post_id) DO NOTHING
                ",
            )
            .bind(user_id)
            .bind(post_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_missing_post(e, post_id))?;

            LikeAction::Liked
        };

        let likes = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM likes WHERE post_id = $1
            ",
        )
        .bind(post_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(LikeToggle::new(action, likes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgLikeRepository>();
    }
}
