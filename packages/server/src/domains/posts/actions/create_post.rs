//! Post creation action
//!
//! The single place a post record comes into existence: validates input,
//! then inserts with status=pending and zero views.

use serde::Deserialize;
use tracing::info;

use crate::common::{Actor, Capability, CoreError};
use crate::domains::posts::models::{Category, NewsPost, MAX_TITLE_LEN};
use crate::kernel::ServerDeps;

/// Raw creation input as supplied by the boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostInput {
    pub title: String,
    pub content: String,
    pub category: String,
    pub district: String,
    pub image_ref: Option<String>,
}

/// Create a news post.
///
/// Fails `Forbidden` for anonymous actors and `Validation` for malformed
/// input; neither failure leaves a post record behind.
pub async fn create_post(
    actor: Actor,
    input: CreatePostInput,
    deps: &ServerDeps,
) -> Result<NewsPost, CoreError> {
    actor.can(Capability::CreatePost).check()?;
    let author_id = actor.user_id().ok_or_else(|| {
        CoreError::Forbidden("authentication required to create posts".to_string())
    })?;

    let title = input.title.trim().to_string();
    if title.is_empty() {
        return Err(CoreError::missing_field("title"));
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "title must be at most {} characters",
            MAX_TITLE_LEN
        )));
    }

    let content = input.content.trim().to_string();
    if content.is_empty() {
        return Err(CoreError::missing_field("content"));
    }

    let district = input.district.trim().to_string();
    if district.is_empty() {
        return Err(CoreError::missing_field("district"));
    }

    let category: Category = input.category.parse().map_err(|_| {
        CoreError::Validation(format!(
            "invalid category '{}', must be one of: {}",
            input.category,
            Category::ALL.map(|c| c.as_str()).join(", ")
        ))
    })?;

    let post = deps
        .posts
        .insert(NewsPost::new(
            author_id,
            title,
            content,
            category,
            district,
            input.image_ref,
        ))
        .await;

    info!(
        post_id = %post.id,
        author_id = %post.author_id,
        category = %post.category,
        district = %post.district,
        "Post submitted for review"
    );

    Ok(post)
}
