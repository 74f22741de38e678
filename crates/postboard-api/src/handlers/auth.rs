//! Authentication handlers
//!
//! Endpoints for signup, signin, and logout.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use postboard_service::dto::{MessageResponse, SigninRequest, SigninResponse, SignupRequest};
use postboard_service::AuthService;

use crate::extractors::{session_cookie, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Register a new user
///
/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.signup(request).await?;
    Ok(Created(Json(response)))
}

/// Sign in and set the session cookie
///
/// POST /signin
pub async fn signin(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<SigninRequest>,
) -> ApiResult<(CookieJar, Json<SigninResponse>)> {
    let service = AuthService::new(state.service_context());
    let signed_in = service.signin(request).await?;

    let cookie = session_cookie(
        state.cookie_name(),
        signed_in.token,
        state.config().session.ttl_seconds,
    );

    Ok((jar.add(cookie), Json(signed_in.response)))
}

/// End the session, if any, and clear the cookie
///
/// POST /logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<(CookieJar, Json<MessageResponse>)> {
    let name = state.cookie_name().to_string();
    let token = jar.get(&name).map(|c| c.value().to_string());

    let service = AuthService::new(state.service_context());
    let response = service.signout(token.as_deref()).await?;

    let jar = jar.remove(Cookie::build((name, "")).path("/"));
    Ok((jar, Json(response)))
}
