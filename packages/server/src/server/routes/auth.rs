//! Auth routes: register, login, logout, current user.

use axum::{
    extract::Extension,
    http::{HeaderMap, StatusCode},
    response::Json,
};
use serde::Serialize;

use crate::domains::identity::actions::{
    current_user, login, register, IssuedSession, LoginInput, RegisterInput,
};
use crate::domains::identity::models::UserProfile;
use crate::server::app::AppState;
use crate::server::middleware::session_auth::bearer_token;

use super::error::ApiError;

#[derive(Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub user: UserProfile,
}

impl From<IssuedSession> for SessionResponse {
    fn from(issued: IssuedSession) -> Self {
        Self {
            token: issued.token,
            user: issued.user.profile(),
        }
    }
}

pub async fn register_handler(
    Extension(state): Extension<AppState>,
    Json(input): Json<RegisterInput>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let issued = register(input, &state.deps).await?;
    Ok((StatusCode::CREATED, Json(issued.into())))
}

pub async fn login_handler(
    Extension(state): Extension<AppState>,
    Json(input): Json<LoginInput>,
) -> Result<Json<SessionResponse>, ApiError> {
    let issued = login(input, &state.deps).await?;
    Ok(Json(issued.into()))
}

/// Invalidate the presented session. Succeeds even for unknown tokens;
/// logout is idempotent.
pub async fn logout_handler(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
) -> StatusCode {
    if let Some(token) = bearer_token(&headers) {
        state.deps.sessions.delete_session(token).await;
    }
    StatusCode::NO_CONTENT
}

pub async fn me_handler(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
    let token = bearer_token(&headers).ok_or(crate::common::CoreError::SessionExpired)?;
    let user = current_user(token, &state.deps).await?;
    Ok(Json(serde_json::json!({ "user": user.profile() })))
}
