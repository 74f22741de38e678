//! Domain entities - core business objects

mod post;
mod session;
mod user;

pub use post::{Post, PostView};
pub use session::SessionData;
pub use user::User;
