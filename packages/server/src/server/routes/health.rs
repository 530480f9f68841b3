use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    posts: usize,
    users: usize,
}

/// Health check endpoint
///
/// The stores are in-process, so reachability is the only real check;
/// store sizes are included for quick operational inspection.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let (posts, _, _, _) = state.deps.posts.status_counts().await;
    let users = state.deps.users.count().await;

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            posts,
            users,
        }),
    )
}
