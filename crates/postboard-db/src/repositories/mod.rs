//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in postboard-core.

mod error;
mod like;
mod post;
mod user;

pub use like::PgLikeRepository;
pub use post::PgPostRepository;
pub use user::PgUserRepository;
