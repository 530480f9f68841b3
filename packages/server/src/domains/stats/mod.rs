//! Stats aggregator: derived counts for the moderation dashboard.
//!
//! Read-only and recomputed from authoritative store state on every call;
//! no cache to invalidate.

use serde::Serialize;
use tracing::debug;

use crate::common::{Actor, Capability, CoreError};
use crate::kernel::ServerDeps;

/// Dashboard counters across posts and users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_posts: usize,
    pub pending_posts: usize,
    pub verified_posts: usize,
    pub rejected_posts: usize,
    pub total_users: usize,
}

/// Compute current dashboard statistics. Admin-gated.
pub async fn stats(actor: Actor, deps: &ServerDeps) -> Result<DashboardStats, CoreError> {
    actor.can(Capability::ViewStats).check()?;

    let (total_posts, pending_posts, verified_posts, rejected_posts) =
        deps.posts.status_counts().await;
    let total_users = deps.users.count().await;

    debug!(total_posts, pending_posts, "Dashboard stats computed");

    Ok(DashboardStats {
        total_posts,
        pending_posts,
        verified_posts,
        rejected_posts,
        total_users,
    })
}
