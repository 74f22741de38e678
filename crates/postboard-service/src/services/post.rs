//! Post service
//!
//! Creates posts, lists them per viewer, and announces new ones.

use postboard_core::entities::{PostView, SessionData};
use postboard_core::events::RealtimeEvent;
use postboard_core::value_objects::{PostScope, UserId};
use postboard_core::DomainError;
use tracing::{debug, info, instrument};

use crate::dto::CONTENT_REQUIRED;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

fn require_content(content: &str) -> ServiceResult<()> {
    if content.is_empty() {
        return Err(ServiceError::validation(CONTENT_REQUIRED));
    }
    Ok(())
}

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a post as the signed-in user and announce it
    #[instrument(skip(self, viewer, content), fields(user_id = viewer.user_id))]
    pub async fn create_post(&self, viewer: &SessionData, content: &str) -> ServiceResult<PostView> {
        require_content(content)?;

        let post = self.ctx.post_repo().create(viewer.user_id, content).await?;
        let view = PostView::fresh(&post, viewer.username.clone(), true);

        info!(post_id = post.id, "Post created");
        self.announce(&view);

        Ok(view)
    }

    /// Create a post on behalf of another account (used by the seeder)
    #[instrument(skip(self, content))]
    pub async fn publish_as(&self, user_id: UserId, content: &str) -> ServiceResult<PostView> {
        require_content(content)?;

        let author = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        let post = self.ctx.post_repo().create(author.id, content).await?;
        let view = PostView::fresh(&post, author.username, false);

        info!(post_id = post.id, "Post published");
        self.announce(&view);

        Ok(view)
    }

    /// List posts visible in a scope, newest first
    #[instrument(skip(self))]
    pub async fn list_posts(&self, viewer: UserId, scope: PostScope) -> ServiceResult<Vec<PostView>> {
        let posts = self.ctx.post_repo().list_views(viewer, scope).await?;
        debug!(count = posts.len(), %scope, "Posts listed");
        Ok(posts)
    }

    fn announce(&self, view: &PostView) {
        let recipients = self
            .ctx
            .broadcaster()
            .broadcast(&RealtimeEvent::NewPost(view.clone()));
        debug!(post_id = view.id, recipients, "new_post broadcast");
    }
}
