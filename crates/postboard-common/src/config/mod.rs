//! Configuration structs

mod app_config;
mod providers;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, DatabaseConfig, Environment, RedisConfig, SeederConfig,
    ServerConfig, SessionConfig,
};
pub use providers::{default_providers, load_providers, ProviderEndpoint, SnippetFormat};
