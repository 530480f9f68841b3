//! Post deletion
//!
//! Immediate and unconditional on current status; only the author or an
//! admin may perform it.

use tracing::info;

use crate::common::{Actor, CoreError, PostId};
use crate::kernel::ServerDeps;

/// Delete a post.
///
/// Fails `NotFound` if the id is unknown and `Forbidden` if the actor is
/// neither the author nor an admin; a failed check removes nothing.
pub async fn delete_post(actor: Actor, post_id: PostId, deps: &ServerDeps) -> Result<(), CoreError> {
    let post = deps.posts.get(post_id).await?;

    if !actor.can_delete(&post) {
        return Err(CoreError::Forbidden(
            "only the author or an admin may delete a post".to_string(),
        ));
    }

    deps.posts.remove(post_id).await?;
    info!(post_id = %post_id, status = %post.status, "Post deleted");

    Ok(())
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
                title: "Street fair next month".to_string(),
                content: "Vendors wanted for the annual fair.".to_string(),
                category: "Events".to_string(),
                district: "Old Town".to_string(),
                image_ref: None,
            },
            deps,
        )
        .await
        .unwrap();
        (author, post.id)
    }

    #[tokio::test]
    async fn test_author_can_delete() {
        let deps = ServerDeps::default();
        let (author, post_id) = seeded(&deps).await;

        delete_post(author, post_id, &deps).await.unwrap();
        assert!(matches!(
            deps.posts.get(post_id).await,
            Err(CoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_admin_can_delete_verified_post() {
        let deps = ServerDeps::default();
        let (_, post_id) = seeded(&deps).await;
        deps.posts
            .transition(post_id, PostStatus::Verified)
            .await
            .unwrap();

        let admin = Actor::authenticated(UserId::new(), Role::Admin);
        delete_post(admin, post_id, &deps).await.unwrap();
    }

    #[tokio::test]
    async fn test_stranger_cannot_delete_and_post_survives() {
        let deps = ServerDeps::default();
        let (_, post_id) = seeded(&deps).await;

        let stranger = Actor::authenticated(UserId::new(), Role::Member);
        let result = delete_post(stranger, post_id, &deps).await;
        assert!(matches!(result, Err(CoreError::Forbidden(_))));

        // Still retrievable afterwards.
        assert!(deps.posts.get(post_id).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let deps = ServerDeps::default();
        let admin = Actor::authenticated(UserId::new(), Role::Admin);
        let result = delete_post(admin, PostId::new(), &deps).await;
        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }
}
