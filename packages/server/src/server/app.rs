//! Application setup and server configuration.

use std::time::Duration;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::middleware::session_auth_middleware;
use crate::server::routes::{
    admin::{moderate_handler, pending_handler, stats_handler},
    auth::{login_handler, logout_handler, me_handler, register_handler},
    health::health_handler,
    meta::{categories_handler, districts_handler},
    news::{
        create_news_handler, delete_news_handler, get_news_handler, list_news_handler,
        update_news_handler,
    },
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: ServerDeps,
}

/// Build the application router.
///
/// The session middleware only extracts auth info; authorization decisions
/// live in the domain actions, so every route is registered the same way.
pub fn build_app(deps: ServerDeps) -> Router {
    let state = AppState { deps: deps.clone() };

    Router::new()
        .route("/health", get(health_handler))
        // Auth
        .route("/api/auth/register", post(register_handler))
        .route("/api/auth/login", post(login_handler))
        .route("/api/auth/logout", post(logout_handler))
        .route("/api/auth/me", get(me_handler))
        // News
        .route("/api/news", get(list_news_handler).post(create_news_handler))
        .route(
            "/api/news/:id",
            get(get_news_handler)
                .put(update_news_handler)
                .delete(delete_news_handler),
        )
        // Admin
        .route("/api/admin/moderate/:id", post(moderate_handler))
        .route("/api/admin/pending", get(pending_handler))
        .route("/api/admin/stats", get(stats_handler))
        // Lookups
        .route("/api/districts", get(districts_handler))
        .route("/api/categories", get(categories_handler))
        .layer(axum::middleware::from_fn_with_state(
            deps.sessions.clone(),
            session_auth_middleware,
        ))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
}
