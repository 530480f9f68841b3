//! Admin routes: moderation decisions, the pending queue, dashboard stats.
//!
//! Gating happens in the domain actions; these handlers only shape the
//! request and response.

use axum::{
    extract::{Extension, Path},
    response::Json,
};
use serde::Deserialize;

use crate::common::PostId;
use crate::domains::moderation::{moderate, pending_queue, Decision};
use crate::domains::posts::models::NewsPost;
use crate::domains::stats::{stats, DashboardStats};
use crate::server::app::AppState;
use crate::server::middleware::{session_auth::actor_from, AuthUser};

use super::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ModerateBody {
    pub decision: Decision,
}

/// `POST /api/admin/moderate/:id` - resolve a pending post.
pub async fn moderate_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(id): Path<PostId>,
    Json(body): Json<ModerateBody>,
) -> Result<Json<NewsPost>, ApiError> {
    let actor = actor_from(auth.as_deref());
    let post = moderate(actor, id, body.decision, &state.deps).await?;
    Ok(Json(post))
}

/// `GET /api/admin/pending` - posts awaiting review, newest first.
pub async fn pending_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let actor = actor_from(auth.as_deref());
    let posts = pending_queue(actor, &state.deps).await?;
    Ok(Json(serde_json::json!({ "news": posts })))
}

/// `GET /api/admin/stats` - dashboard counters.
pub async fn stats_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
) -> Result<Json<DashboardStats>, ApiError> {
    let actor = actor_from(auth.as_deref());
    let dashboard = stats(actor, &state.deps).await?;
    Ok(Json(dashboard))
}
