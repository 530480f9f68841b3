//! Detail-view fetch
//!
//! A successful fetch counts as one view. Visibility follows the capability
//! matrix: verified posts are public, pending/rejected posts are visible
//! only to their author and to admins.

use tracing::debug;

use crate::common::{Actor, CoreError, PostId};
use crate::domains::posts::models::NewsPost;
use crate::kernel::ServerDeps;

/// Fetch a post for its detail view, incrementing the view counter.
///
/// The increment happens only after the visibility check passes, so a
/// forbidden fetch has no side effect.
pub async fn get_post(
    actor: Actor,
    post_id: PostId,
    deps: &ServerDeps,
) -> Result<NewsPost, CoreError> {
    let post = deps.posts.get(post_id).await?;

    if !actor.can_view_detail(&post) {
        return Err(CoreError::Forbidden(
            "post is awaiting review and not publicly visible".to_string(),
        ));
    }

    let view_count = deps.posts.increment_view(post_id).await?;
    debug!(post_id = %post_id, view_count, "Post detail fetched");

    Ok(NewsPost { view_count, ..post })
}
