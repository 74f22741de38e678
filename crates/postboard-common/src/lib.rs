//! # postboard-common
//!
//! Shared utilities including configuration, error handling, authentication, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{
    generate_password, generate_session_token, hash_password, verify_password, PasswordService,
};
pub use config::{
    default_providers, load_providers, AppConfig, AppSettings, ConfigError, DatabaseConfig,
    Environment, ProviderEndpoint, RedisConfig, SeederConfig, ServerConfig, SessionConfig,
    SnippetFormat,
};
pub use error::{AppError, ErrorResponse};
pub use telemetry::{try_init_tracing, try_init_tracing_with_config, TracingConfig, TracingError};
