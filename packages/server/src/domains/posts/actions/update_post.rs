//! Post editing
//!
//! The author or an admin may change title, content, category and district.
//! Moderation status, authorship and the view counter are never editable.

use serde::Deserialize;
use tracing::info;

use crate::common::{Actor, CoreError, PostId};
use crate::domains::posts::models::{Category, NewsPost, MAX_TITLE_LEN};
use crate::domains::posts::store::PostChanges;
use crate::kernel::ServerDeps;

/// Partial update input; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePostInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub district: Option<String>,
}

/// Edit a post's content fields.
///
/// Validation matches creation; a failed check or validation applies
/// nothing.
pub async fn update_post(
    actor: Actor,
    post_id: PostId,
    input: UpdatePostInput,
    deps: &ServerDeps,
) -> Result<NewsPost, CoreError> {
    let post = deps.posts.get(post_id).await?;

    if !actor.can_edit(&post) {
        return Err(CoreError::Forbidden(
            "only the author or an admin may edit a post".to_string(),
        ));
    }

    let mut changes = PostChanges::default();

    if let Some(title) = input.title {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(CoreError::missing_field("title"));
        }
        if title.chars().count() > MAX_TITLE_LEN {
            return Err(CoreError::Validation(format!(
                "title must be at most {} characters",
                MAX_TITLE_LEN
            )));
        }
        changes.title = Some(title);
    }

    if let Some(content) = input.content {
        let content = content.trim().to_string();
        if content.is_empty() {
            return Err(CoreError::missing_field("content"));
        }
        changes.content = Some(content);
    }

    if let Some(category) = input.category {
        let parsed: Category = category.parse().map_err(|_| {
            CoreError::Validation(format!(
                "invalid category '{}', must be one of: {}",
                category,
                Category::ALL.map(|c| c.as_str()).join(", ")
            ))
        })?;
        changes.category = Some(parsed);
    }

    if let Some(district) = input.district {
        let district = district.trim().to_string();
        if district.is_empty() {
            return Err(CoreError::missing_field("district"));
        }
        changes.district = Some(district);
    }

    let updated = deps.posts.apply_changes(post_id, changes).await?;
    info!(post_id = %post_id, "Post updated");

    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Role, UserId};
    use crate::domains::posts::actions::{create_post, CreatePostInput};
    use crate::domains::posts::models::PostStatus;

    async fn seeded(deps: &ServerDeps) -> (Actor, PostId) {
        let author = Actor::authenticated(UserId::new(), Role::Member);
        let post = create_post(
            author,
            CreatePostInput {
                title: "Fallen tree on Elm Ave".to_string(),
                content: "Blocking the bike lane since this morning.".to_string(),
                category: "Danger".to_string(),
                district: "Elmwood".to_string(),
                image_ref: None,
            },
            deps,
        )
        .await
        .unwrap();
        (author, post.id)
    }

    #[tokio::test]
    async fn test_author_edits_content_status_untouched() {
        let deps = ServerDeps::default();
        let (author, post_id) = seeded(&deps).await;

        let updated = update_post(
            author,
            post_id,
            UpdatePostInput {
                content: Some("Cleared by the city crew.".to_string()),
                ..Default::default()
            },
            &deps,
        )
        .await
        .unwrap();

        assert_eq!(updated.content, "Cleared by the city crew.");
        assert_eq!(updated.status, PostStatus::Pending);
    }

    #[tokio::test]
    async fn test_stranger_cannot_edit() {
        let deps = ServerDeps::default();
        let (_, post_id) = seeded(&deps).await;
        let stranger = Actor::authenticated(UserId::new(), Role::Member);

        let result = update_post(
            stranger,
            post_id,
            UpdatePostInput {
                title: Some("Hijacked".to_string()),
                ..Default::default()
            },
            &deps,
        )
        .await;
        assert!(matches!(result, Err(CoreError::Forbidden(_))));
        assert_eq!(deps.posts.get(post_id).await.unwrap().title, "Fallen tree on Elm Ave");
    }

    #[tokio::test]
    async fn test_invalid_category_applies_nothing() {
        let deps = ServerDeps::default();
        let (author, post_id) = seeded(&deps).await;

        let result = update_post(
            author,
            post_id,
            UpdatePostInput {
                title: Some("Fallen tree cleared".to_string()),
                category: Some("Weather".to_string()),
                ..Default::default()
            },
            &deps,
        )
        .await;
        assert!(matches!(result, Err(CoreError::Validation(_))));

        // The valid title change must not have been applied either.
        assert_eq!(deps.posts.get(post_id).await.unwrap().title, "Fallen tree on Elm Ave");
    }
}
