//! Lookup routes backing the feed filter UI.

use axum::{extract::Extension, response::Json};

use crate::domains::posts::models::Category;
use crate::server::app::AppState;

/// `GET /api/districts` - all distinct districts seen so far.
pub async fn districts_handler(Extension(state): Extension<AppState>) -> Json<serde_json::Value> {
    let districts = state.deps.posts.districts().await;
    Json(serde_json::json!({ "districts": districts }))
}

/// `GET /api/categories` - the closed category set.
pub async fn categories_handler() -> Json<serde_json::Value> {
    let categories: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    Json(serde_json::json!({ "categories": categories }))
}
