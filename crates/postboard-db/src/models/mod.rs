//! Database models - SQLx-compatible structs for PostgreSQL rows

mod post;
mod user;

pub use post::{PostModel, PostViewModel};
pub use user::UserModel;
