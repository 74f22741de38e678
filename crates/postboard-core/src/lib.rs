//! # postboard-core
//!
//! Domain layer containing entities, value objects, repository traits, and realtime events.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Post, PostView, SessionData, User};
pub use error::DomainError;
pub use events::{LikeUpdate, RealtimeEvent};
pub use traits::{
    EventBroadcaster, LikeRepository, PostRepository, RepoResult, SessionStore, UserRepository,
};
pub use value_objects::{LikeAction, LikeToggle, PostId, PostScope, UserId};
