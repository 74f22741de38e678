//! Authentication service
//!
//! Handles registration, sign-in, sign-out, and session resolution.

use postboard_common::auth::{generate_session_token, hash_password, verify_password};
use postboard_common::AppError;
use postboard_core::entities::SessionData;
use postboard_core::DomainError;
use tracing::{debug, info, instrument, warn};

use crate::dto::{MessageResponse, SigninRequest, SigninResponse, SignupRequest, CREDENTIALS_REQUIRED};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// A freshly created session: the opaque token for the cookie plus the body
#[derive(Debug, Clone)]
pub struct SignedIn {
    pub token: String,
    pub response: SigninResponse,
}

fn require_credentials(username: &str, password: &str) -> ServiceResult<()> {
    if username.is_empty() || password.is_empty() {
        return Err(ServiceError::validation(CREDENTIALS_REQUIRED));
    }
    Ok(())
}

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn signup(&self, request: SignupRequest) -> ServiceResult<MessageResponse> {
        require_credentials(&request.username, &request.password)?;

        if self.ctx.user_repo().username_exists(&request.username).await? {
            warn!("Signup rejected: username taken");
            return Err(ServiceError::conflict("Username already exists"));
        }

        let password_hash = hash_password(&request.password)?;

        // A concurrent signup can still win the race; the unique index decides.
        let user = self
            .ctx
            .user_repo()
            .create(&request.username, &password_hash)
            .await
            .map_err(|e| match e {
                DomainError::UsernameTaken(_) => ServiceError::conflict("Username already exists"),
                other => ServiceError::from(other),
            })?;

        info!(user_id = user.id, "User registered successfully");

        Ok(MessageResponse::new("User registered successfully"))
    }

    /// Sign in with username and password, creating a session
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn signin(&self, request: SigninRequest) -> ServiceResult<SignedIn> {
        require_credentials(&request.username, &request.password)?;

        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!("Signin failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Signin failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !verify_password(&request.password, &password_hash)? {
            warn!(user_id = user.id, "Signin failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let token = generate_session_token();
        let session = SessionData::new(user.id, user.username.clone());
        self.ctx.session_store().create(&token, &session).await?;

        info!(user_id = user.id, "User signed in");

        Ok(SignedIn {
            token,
            response: SigninResponse::new(user.username),
        })
    }

    /// End a session. Safe to call without a session or with a stale token.
    #[instrument(skip(self, token))]
    pub async fn signout(&self, token: Option<&str>) -> ServiceResult<MessageResponse> {
        if let Some(token) = token {
            let existed = self.ctx.session_store().delete(token).await?;
            debug!(existed, "Session cleared");
        }

        Ok(MessageResponse::new("Logged out successfully"))
    }

    /// Resolve a session token to its session
    #[instrument(skip(self, token))]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<SessionData> {
        self.ctx
            .session_store()
            .get(token)
            .await?
            .ok_or(ServiceError::App(AppError::MissingAuth))
    }
}
