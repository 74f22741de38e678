//! # postboard-service
//!
//! Application layer containing business logic, services, DTOs, and the
//! background content seeder.

pub mod dto;
pub mod seeder;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use seeder::{ContentProvider, ContentSeeder, HttpContentProvider, SeederSettings, TickOutcome};
pub use services::{
    AuthService, LikeService, PostService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, SignedIn,
};
