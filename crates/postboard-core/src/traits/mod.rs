//! Ports implemented by the infrastructure crates

mod broadcaster;
mod repositories;
mod session;

pub use broadcaster::EventBroadcaster;
pub use repositories::{LikeRepository, PostRepository, RepoResult, UserRepository};
pub use session::SessionStore;
