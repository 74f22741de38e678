//! Response types and error handling for API endpoints
//!
//! Every error renders as `{"error": "<message>"}`. Server errors are logged
//! in full and shown to the client only as a generic message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use postboard_common::error::{DATABASE_ERROR_MESSAGE, INTERNAL_ERROR_MESSAGE};
use postboard_common::{AppError, ErrorResponse};
use postboard_service::ServiceError;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            Self::App(e) => e.status_code(),
            Self::Service(e) => e.status_code(),
            Self::Validation(_) => 400,
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &str {
        match self {
            Self::App(e) => e.error_code(),
            Self::Service(e) => e.error_code(),
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }

    /// Message shown to the client
    #[must_use]
    pub fn public_message(&self) -> String {
        if !self.status_code().is_server_error() {
            return self.to_string();
        }

        match self {
            Self::App(e) | Self::Service(ServiceError::App(e)) => e.public_message(),
            Self::Service(ServiceError::Domain(e)) if e.is_store_error() => {
                DATABASE_ERROR_MESSAGE.to_string()
            }
            _ => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }

    /// The not-found error for a post
    pub fn post_not_found() -> Self {
        Self::App(AppError::not_found("Post not found"))
    }

    /// No usable session
    pub fn unauthorized() -> Self {
        Self::App(AppError::MissingAuth)
    }

    /// Whether this error only means the caller is signed out
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == StatusCode::UNAUTHORIZED
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(ToString::to_string))
            .unwrap_or_else(|| errors.to_string());
        Self::Validation(message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log server errors
        if status.is_server_error() {
            error!(error = ?self, code = self.error_code(), "Server error occurred");
        }

        (status, Json(ErrorResponse::new(self.public_message()))).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
