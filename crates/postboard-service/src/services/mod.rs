//! Business logic services
//!
//! Each service borrows the shared `ServiceContext` for the duration of one
//! operation.

pub mod auth;
pub mod context;
pub mod error;
pub mod like;
pub mod post;

pub use auth::{AuthService, SignedIn};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use like::LikeService;
pub use post::PostService;
