//! Value objects - identifiers and small domain enums

mod like_action;
mod post_scope;

pub use like_action::{LikeAction, LikeToggle};
pub use post_scope::PostScope;

/// Database-assigned user identifier
pub type UserId = i64;

/// Database-assigned post identifier
pub type PostId = i64;
