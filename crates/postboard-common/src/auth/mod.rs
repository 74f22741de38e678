//! Authentication utilities

mod password;
mod session_token;

pub use password::{generate_password, hash_password, verify_password, PasswordService};
pub use session_token::{generate_session_token, SESSION_TOKEN_BYTES};
