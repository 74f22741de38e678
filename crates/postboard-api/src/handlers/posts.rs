//! Post and like handlers

use axum::{extract::State, Json};
use postboard_core::{PostScope, PostView};
use postboard_service::dto::{CreatePostRequest, LikeResponse};
use postboard_service::{LikeService, PostService};

use crate::extractors::{PostIdPath, SessionUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

async fn list(state: &AppState, user: &SessionUser, scope: PostScope) -> ApiResult<Json<Vec<PostView>>> {
    let service = PostService::new(state.service_context());
    let posts = service.list_posts(user.user_id(), scope).await?;
    Ok(Json(posts))
}

/// Every post, newest first
///
/// GET /posts
pub async fn list_all(State(state): State<AppState>, user: SessionUser) -> ApiResult<Json<Vec<PostView>>> {
    list(&state, &user, PostScope::All).await
}

/// Posts authored by the caller
///
/// GET /posts/my
pub async fn list_mine(State(state): State<AppState>, user: SessionUser) -> ApiResult<Json<Vec<PostView>>> {
    list(&state, &user, PostScope::Mine).await
}

/// Posts the caller has liked
///
/// GET /posts/liked
pub async fn list_liked(State(state): State<AppState>, user: SessionUser) -> ApiResult<Json<Vec<PostView>>> {
    list(&state, &user, PostScope::Liked).await
}

/// Create a post and announce it to every realtime client
///
/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    user: SessionUser,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> ApiResult<Created<Json<PostView>>> {
    let service = PostService::new(state.service_context());
    let post = service.create_post(&user.session, &request.content).await?;
    Ok(Created(Json(post)))
}

/// Like or unlike a post
///
/// POST /posts/:post_id/like
pub async fn toggle_like(
    State(state): State<AppState>,
    user: SessionUser,
    PostIdPath(post_id): PostIdPath,
) -> ApiResult<Json<LikeResponse>> {
    let service = LikeService::new(state.service_context());
    let response = service.toggle_like(user.user_id(), post_id).await?;
    Ok(Json(response))
}
