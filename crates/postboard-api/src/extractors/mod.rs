//! Axum extractors for request handling
//!
//! Custom extractors for sessions, validation, and path parameters.

mod path;
mod session;
mod validated;

pub use path::PostIdPath;
pub use session::{session_cookie, OptionalSessionUser, SessionUser};
pub use validated::ValidatedJson;
