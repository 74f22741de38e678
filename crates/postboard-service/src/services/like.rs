//! Like service
//!
//! Toggles a viewer's like on a post and announces the new count.

use postboard_core::events::{LikeUpdate, RealtimeEvent};
use postboard_core::value_objects::{PostId, UserId};
use postboard_core::DomainError;
use tracing::{debug, info, instrument};

use crate::dto::LikeResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Like service
pub struct LikeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LikeService<'a> {
    /// Create a new LikeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Flip the viewer's like on a post
    ///
    /// The broadcast happens only after the toggle has committed, so every
    /// observer sees a count that is already durable.
    #[instrument(skip(self))]
    pub async fn toggle_like(&self, viewer: UserId, post_id: PostId) -> ServiceResult<LikeResponse> {
        let post = self
            .ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or(DomainError::PostNotFound(post_id))?;

        if post.is_authored_by(viewer) {
            return Err(DomainError::SelfLike.into());
        }

        let toggle = self.ctx.like_repo().toggle(viewer, post_id).await?;

        info!(action = %toggle.action, likes = toggle.likes, "Like toggled");

        let recipients = self.ctx.broadcaster().broadcast(&RealtimeEvent::LikeUpdate(
            LikeUpdate::new(post_id, toggle.likes, toggle.action, viewer),
        ));
        debug!(recipients, "like_update broadcast");

        Ok(LikeResponse::from(toggle))
    }
}
