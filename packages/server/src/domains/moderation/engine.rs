//! Moderation engine
//!
//! One state machine instance per post: `Pending` is the initial state,
//! `Verified` and `Rejected` are terminal. The check order is fixed -
//! capability, existence, current state - and the check-then-set runs
//! inside a single store write-lock section, so concurrent decisions on
//! the same pending post resolve to exactly one winner.

use serde::Deserialize;
use tracing::info;

use crate::common::{Actor, Capability, CoreError, PostId};
use crate::domains::posts::models::{NewsPost, PostStatus};
use crate::kernel::ServerDeps;

/// Moderation decision on a pending post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Verify,
    Reject,
}

impl Decision {
    fn target(self) -> PostStatus {
        match self {
            Decision::Verify => PostStatus::Verified,
            Decision::Reject => PostStatus::Rejected,
        }
    }
}

/// Resolve a pending post to `Verified` or `Rejected`.
///
/// Fails `Forbidden` (actor cannot moderate), `NotFound` (unknown post) or
/// `InvalidTransition` (post already resolved); a failure changes nothing.
pub async fn moderate(
    actor: Actor,
    post_id: PostId,
    decision: Decision,
    deps: &ServerDeps,
) -> Result<NewsPost, CoreError> {
    actor.can(Capability::Moderate).check()?;

    let post = deps.posts.transition(post_id, decision.target()).await?;
    info!(
        post_id = %post_id,
        status = %post.status,
        "Post moderated"
    );

    Ok(post)
}

/// List pending posts for admin review, newest first.
pub async fn pending_queue(actor: Actor, deps: &ServerDeps) -> Result<Vec<NewsPost>, CoreError> {
    actor.can(Capability::Moderate).check()?;

    let mut posts = deps.posts.by_status(PostStatus::Pending).await;
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{Role, UserId};
    use crate::domains::posts::actions::{create_post, CreatePostInput};

    fn admin() -> Actor {
        Actor::authenticated(UserId::new(), Role::Admin)
    }

    fn member() -> Actor {
        Actor::authenticated(UserId::new(), Role::Member)
    }

    async fn pending(deps: &ServerDeps, title: &str) -> PostId {
        create_post(
            member(),
            CreatePostInput {
                title: title.to_string(),
                content: "Details inside.".to_string(),
                category: "Events".to_string(),
                district: "Harbor".to_string(),
                image_ref: None,
            },
            deps,
        )
        .await
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn test_admin_verifies_pending_post() {
        let deps = ServerDeps::default();
        let post_id = pending(&deps, "Harbor festival").await;

        let post = moderate(admin(), post_id, Decision::Verify, &deps)
            .await
            .unwrap();
        assert_eq!(post.status, PostStatus::Verified);
    }

    #[tokio::test]
    async fn test_member_cannot_moderate() {
        let deps = ServerDeps::default();
        let post_id = pending(&deps, "Harbor festival").await;

        let result = moderate(member(), post_id, Decision::Reject, &deps).await;
        assert!(matches!(result, Err(CoreError::Forbidden(_))));
        assert_eq!(
            deps.posts.get(post_id).await.unwrap().status,
            PostStatus::Pending
        );
    }

    #[tokio::test]
    async fn test_second_decision_fails_and_changes_nothing() {
        let deps = ServerDeps::default();
        let post_id = pending(&deps, "Harbor festival").await;

        moderate(admin(), post_id, Decision::Reject, &deps)
            .await
            .unwrap();

        for decision in [Decision::Verify, Decision::Reject] {
            let result = moderate(admin(), post_id, decision, &deps).await;
            assert!(matches!(
                result,
                Err(CoreError::InvalidTransition {
                    from: PostStatus::Rejected
                })
            ));
        }
        assert_eq!(
            deps.posts.get(post_id).await.unwrap().status,
            PostStatus::Rejected
        );
    }

    #[tokio::test]
    async fn test_unknown_post_is_not_found() {
        let deps = ServerDeps::default();
        let result = moderate(admin(), PostId::new(), Decision::Verify, &deps).await;
        assert!(matches!(result, Err(CoreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_concurrent_admins_exactly_one_success() {
        let deps = ServerDeps::default();
        let post_id = pending(&deps, "Harbor festival").await;

        let verify = {
            let deps = deps.clone();
            tokio::spawn(async move { moderate(admin(), post_id, Decision::Verify, &deps).await })
        };
        let reject = {
            let deps = deps.clone();
            tokio::spawn(async move { moderate(admin(), post_id, Decision::Reject, &deps).await })
        };

        let results = [verify.await.unwrap(), reject.await.unwrap()];
        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .any(|r| matches!(r, Err(CoreError::InvalidTransition { .. }))));

        let final_status = deps.posts.get(post_id).await.unwrap().status;
        let winner = results.iter().find_map(|r| r.as_ref().ok()).unwrap();
        assert_eq!(final_status, winner.status, "final status matches the winner");
    }

    #[tokio::test]
    async fn test_pending_queue_is_admin_gated_and_newest_first() {
        let deps = ServerDeps::default();
        let first = pending(&deps, "First").await;
        let second = pending(&deps, "Second").await;

        assert!(matches!(
            pending_queue(member(), &deps).await,
            Err(CoreError::Forbidden(_))
        ));

        let queue = pending_queue(admin(), &deps).await.unwrap();
        let ids: Vec<PostId> = queue.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![second, first]);
    }
}
