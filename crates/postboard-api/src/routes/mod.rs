//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{auth, health, pages, posts, realtime};
use crate::state::AppState;

/// Create the main router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(page_routes())
        .merge(auth_routes())
        .merge(post_routes())
        .route("/ws", get(realtime::realtime))
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn page_routes() -> Router<AppState> {
    Router::new().route("/", get(pages::index))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/signin", post(auth::signin))
        .route("/logout", post(auth::logout))
}

/// Post and like routes
fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", get(posts::list_all).post(posts::create_post))
        .route("/posts/my", get(posts::list_mine))
        .route("/posts/liked", get(posts::list_liked))
        .route("/posts/:post_id/like", post(posts::toggle_like))
}
