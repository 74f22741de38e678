//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use postboard_cache::{MemorySessionStore, RedisPool, RedisSessionStore};
use postboard_common::{AppConfig, AppError};
use postboard_core::SessionStore;
use postboard_db::{
    create_pool, run_migrations, PgLikeRepository, PgPostRepository, PgUserRepository, PoolConfig,
};
use postboard_gateway::ConnectionManager;
use postboard_service::{ContentSeeder, ServiceContextBuilder};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(format!("Migration failed: {e}")))?;
    info!("PostgreSQL connection established, schema ready");

    let ttl = config.session.ttl_seconds;
    let session_store: Arc<dyn SessionStore> = match &config.redis {
        Some(redis) => {
            info!("Using Redis-backed sessions");
            let redis_pool = RedisPool::from_config(redis).map_err(|e| AppError::Cache(e.to_string()))?;
            Arc::new(RedisSessionStore::new(redis_pool, ttl))
        }
        None => {
            info!("REDIS_URL not set, sessions are kept in process memory");
            Arc::new(MemorySessionStore::new(ttl))
        }
    };

    let connections = ConnectionManager::new_shared();

    let service_context = ServiceContextBuilder::new()
        .user_repo(Arc::new(PgUserRepository::new(pool.clone())))
        .post_repo(Arc::new(PgPostRepository::new(pool.clone())))
        .like_repo(Arc::new(PgLikeRepository::new(pool.clone())))
        .session_store(session_store)
        .broadcaster(connections.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, connections, pool, config))
}

/// Start the background content seeder if it is enabled
pub fn spawn_seeder(state: &AppState) -> Result<Option<JoinHandle<()>>, AppError> {
    let config = &state.config().seeder;
    if !config.enabled {
        info!("Content seeder disabled");
        return Ok(None);
    }

    let seeder = ContentSeeder::from_config(state.service_context().clone(), config)
        .map_err(|e| AppError::Config(format!("Content seeder: {e}")))?;

    info!(
        providers = config.providers.len(),
        tick_interval_secs = config.tick_interval_secs,
        "Starting content seeder"
    );
    Ok(Some(seeder.spawn()))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let address = config.server.address();
    let addr: SocketAddr = address
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address {address}: {e}")))?;

    let state = create_app_state(config).await?;
    let _seeder = spawn_seeder(&state)?;

    let app = create_app(state);

    run_server(app, addr).await
}
