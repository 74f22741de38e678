//! Session extractor
//!
//! Resolves the session cookie to the signed-in user.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use postboard_core::SessionData;
use postboard_service::AuthService;

use crate::response::ApiError;
use crate::state::AppState;

/// Build the session cookie carrying an opaque token
pub fn session_cookie(name: &str, token: String, ttl_seconds: u64) -> Cookie<'static> {
    Cookie::build((name.to_string(), token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::seconds(ttl_seconds.try_into().unwrap_or(i64::MAX)))
        .build()
}

/// Signed-in user resolved from the session cookie
#[derive(Debug, Clone)]
pub struct SessionUser {
    /// Opaque session token from the cookie
    pub token: String,
    pub session: SessionData,
}

impl SessionUser {
    pub fn user_id(&self) -> postboard_core::UserId {
        self.session.user_id
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = CookieJar::from_headers(&parts.headers)
            .get(app_state.cookie_name())
            .map(|c| c.value().to_string())
            .ok_or_else(ApiError::unauthorized)?;

        let session = AuthService::new(app_state.service_context())
            .authenticate(&token)
            .await?;

        Ok(SessionUser { token, session })
    }
}

/// Signed-in user if there is one
///
/// Never rejects: a missing, stale, or unreadable session is `None`.
#[derive(Debug, Clone)]
pub struct OptionalSessionUser(pub Option<SessionUser>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalSessionUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match SessionUser::from_request_parts(parts, state).await {
            Ok(user) => Ok(OptionalSessionUser(Some(user))),
            Err(e) if e.is_unauthorized() => Ok(OptionalSessionUser(None)),
            Err(e) => {
                tracing::warn!(error = %e, "Session lookup failed, continuing signed out");
                Ok(OptionalSessionUser(None))
            }
        }
    }
}
