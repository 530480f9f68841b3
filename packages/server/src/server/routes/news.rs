//! News routes: public feed, detail view, create/update/delete.

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;

use crate::common::{CoreError, PostId};
use crate::domains::feed::{list_feed, FeedFilters, FeedPage};
use crate::domains::posts::actions::{
    create_post, delete_post, get_post, update_post, CreatePostInput, UpdatePostInput,
};
use crate::domains::posts::models::{Category, NewsPost};
use crate::server::app::AppState;
use crate::server::middleware::{session_auth::actor_from, AuthUser};

use super::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct FeedParams {
    pub district: Option<String>,
    pub category: Option<String>,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

fn default_page() -> usize {
    1
}

fn default_per_page() -> usize {
    20
}

/// `GET /api/news` - the public feed. Verified posts only, regardless of
/// who asks.
pub async fn list_news_handler(
    Extension(state): Extension<AppState>,
    Query(params): Query<FeedParams>,
) -> Result<Json<FeedPage>, ApiError> {
    let category = params
        .category
        .as_deref()
        .map(|raw| {
            raw.parse::<Category>().map_err(|_| {
                CoreError::Validation(format!("invalid category filter '{}'", raw))
            })
        })
        .transpose()?;

    let feed = list_feed(
        FeedFilters {
            district: params.district,
            category,
        },
        params.page,
        params.per_page,
        &state.deps,
    )
    .await?;

    Ok(Json(feed))
}

/// `GET /api/news/:id` - detail view; a successful fetch counts one view.
pub async fn get_news_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(id): Path<PostId>,
) -> Result<Json<NewsPost>, ApiError> {
    let actor = actor_from(auth.as_deref());
    let post = get_post(actor, id, &state.deps).await?;
    Ok(Json(post))
}

/// `POST /api/news` - submit a post for review.
pub async fn create_news_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Json(input): Json<CreatePostInput>,
) -> Result<(StatusCode, Json<NewsPost>), ApiError> {
    let actor = actor_from(auth.as_deref());
    let post = create_post(actor, input, &state.deps).await?;
    Ok((StatusCode::CREATED, Json(post)))
}

/// `PUT /api/news/:id` - edit content fields (author or admin).
pub async fn update_news_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(id): Path<PostId>,
    Json(input): Json<UpdatePostInput>,
) -> Result<Json<NewsPost>, ApiError> {
    let actor = actor_from(auth.as_deref());
    let post = update_post(actor, id, input, &state.deps).await?;
    Ok(Json(post))
}

/// `DELETE /api/news/:id` - remove a post (author or admin).
pub async fn delete_news_handler(
    Extension(state): Extension<AppState>,
    auth: Option<Extension<AuthUser>>,
    Path(id): Path<PostId>,
) -> Result<StatusCode, ApiError> {
    let actor = actor_from(auth.as_deref());
    delete_post(actor, id, &state.deps).await?;
    Ok(StatusCode::NO_CONTENT)
}
