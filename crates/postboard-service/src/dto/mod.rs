//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain values to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    CreatePostRequest, SigninRequest, SignupRequest, CONTENT_REQUIRED, CREDENTIALS_REQUIRED,
};
pub use responses::{
    HealthChecks, HealthResponse, LikeResponse, MessageResponse, ReadinessResponse,
    SigninResponse,
};
