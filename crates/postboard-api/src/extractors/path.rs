//! Path parameter extractors

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use postboard_core::PostId;

use crate::response::ApiError;

/// Post ID from `/posts/:post_id/...`
///
/// An ID that does not parse names no post, so it is a 404 like any other
/// unknown post.
#[derive(Debug, Clone, Copy)]
pub struct PostIdPath(pub PostId);

#[async_trait]
impl<S> FromRequestParts<S> for PostIdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::post_not_found())?;

        raw.parse()
            .map(PostIdPath)
            .map_err(|_| ApiError::post_not_found())
    }
}
