//! Request DTOs for API endpoints
//!
//! Missing fields deserialize to empty strings so that validation, not the
//! JSON decoder, reports them.

use serde::Deserialize;
use validator::Validate;

/// Message for a missing username or password
pub const CREDENTIALS_REQUIRED: &str = "Username and password are required";

/// Message for missing or blank post content
pub const CONTENT_REQUIRED: &str = "Content is required";

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SignupRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Username and password are required"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Username and password are required"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SigninRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Username and password are required"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Username and password are required"))]
    pub password: String,
}

// ============================================================================
// Post Requests
// ============================================================================

/// Create post request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}
