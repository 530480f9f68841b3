//! In-memory content store
//!
//! Owns the canonical post set behind a single `RwLock`. Status transitions
//! do their read-check-write inside one write-lock acquisition, so two
//! concurrent moderation calls on the same pending post can never both
//! succeed. Readers take the read lock and never observe a torn status.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::common::{CoreError, PostId};

use super::models::{NewsPost, PostStatus};

/// Field updates applied by the edit path. `None` leaves a field unchanged.
/// Status, author and view count are deliberately not expressible here.
#[derive(Debug, Default, Clone)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<super::models::Category>,
    pub district: Option<String>,
}

pub struct ContentStore {
    posts: Arc<RwLock<HashMap<PostId, NewsPost>>>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self {
            posts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Insert a freshly created post.
    pub async fn insert(&self, post: NewsPost) -> NewsPost {
        let mut posts = self.posts.write().await;
        posts.insert(post.id, post.clone());
        post
    }

    /// Fetch a post by id.
    pub async fn get(&self, id: PostId) -> Result<NewsPost, CoreError> {
        let posts = self.posts.read().await;
        posts.get(&id).cloned().ok_or(CoreError::NotFound("post"))
    }

    /// Remove a post unconditionally (permission checks happen in the action).
    pub async fn remove(&self, id: PostId) -> Result<(), CoreError> {
        let mut posts = self.posts.write().await;
        posts.remove(&id).map(|_| ()).ok_or(CoreError::NotFound("post"))
    }

    /// Apply edit changes to a post. Bumps `updated_at`; never touches
    /// status, author or view count.
    pub async fn apply_changes(
        &self,
        id: PostId,
        changes: PostChanges,
    ) -> Result<NewsPost, CoreError> {
        let mut posts = self.posts.write().await;
        let post = posts.get_mut(&id).ok_or(CoreError::NotFound("post"))?;

        if let Some(title) = changes.title {
            post.title = title;
        }
        if let Some(content) = changes.content {
            post.content = content;
        }
        if let Some(category) = changes.category {
            post.category = category;
        }
        if let Some(district) = changes.district {
            post.district = district;
        }
        post.updated_at = chrono::Utc::now();

        Ok(post.clone())
    }

    /// Add exactly 1 to the view counter. Each call is counted; the counter
    /// never decreases.
    pub async fn increment_view(&self, id: PostId) -> Result<u64, CoreError> {
        let mut posts = self.posts.write().await;
        let post = posts.get_mut(&id).ok_or(CoreError::NotFound("post"))?;
        post.view_count += 1;
        Ok(post.view_count)
    }

    /// Atomic check-and-set of the moderation status.
    ///
    /// Succeeds only from `Pending`; a post already in a terminal state
    /// fails `InvalidTransition` and is left unchanged.
    pub async fn transition(&self, id: PostId, to: PostStatus) -> Result<NewsPost, CoreError> {
        debug_assert!(to.is_terminal(), "transitions only ever target a terminal state");

        let mut posts = self.posts.write().await;
        let post = posts.get_mut(&id).ok_or(CoreError::NotFound("post"))?;

        if post.status != PostStatus::Pending {
            return Err(CoreError::InvalidTransition { from: post.status });
        }

        post.status = to;
        post.updated_at = chrono::Utc::now();
        Ok(post.clone())
    }

    /// Snapshot of every post, no particular order.
    pub async fn all(&self) -> Vec<NewsPost> {
        let posts = self.posts.read().await;
        posts.values().cloned().collect()
    }

    /// Snapshot of posts in the given status, no particular order.
    pub async fn by_status(&self, status: PostStatus) -> Vec<NewsPost> {
        let posts = self.posts.read().await;
        posts
            .values()
            .filter(|p| p.status == status)
            .cloned()
            .collect()
    }

    /// Post counts per status in a single lock pass: (total, pending,
    /// verified, rejected).
    pub async fn status_counts(&self) -> (usize, usize, usize, usize) {
        let posts = self.posts.read().await;
        let mut pending = 0;
        let mut verified = 0;
        let mut rejected = 0;
        for post in posts.values() {
            match post.status {
                PostStatus::Pending => pending += 1,
                PostStatus::Verified => verified += 1,
                PostStatus::Rejected => rejected += 1,
            }
        }
        (posts.len(), pending, verified, rejected)
    }

    /// All distinct districts across every post, sorted.
    pub async fn districts(&self) -> Vec<String> {
        let posts = self.posts.read().await;
        posts
            .values()
            .map(|p| p.district.clone())
            .collect::<std::collections::BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::UserId;
    use crate::domains::posts::models::Category;

    fn sample_post() -> NewsPost {
        NewsPost::new(
            UserId::new(),
            "Bridge repairs start Monday".to_string(),
            "Expect detours on the north side.".to_string(),
            Category::Transport,
            "Northgate".to_string(),
            None,
        )
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let store = ContentStore::new();
        let post = store.insert(sample_post()).await;

        let fetched = store.get(post.id).await.unwrap();
        assert_eq!(fetched.title, post.title);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let store = ContentStore::new();
        let result = store.get(PostId::new()).await;
        assert!(matches!(result, Err(CoreError::NotFound("post"))));
    }

    #[tokio::test]
    async fn test_transition_from_pending_succeeds_once() {
        let store = ContentStore::new();
        let post = store.insert(sample_post()).await;

        let verified = store.transition(post.id, PostStatus::Verified).await.unwrap();
        assert_eq!(verified.status, PostStatus::Verified);

        // Terminal state is final, for either decision.
        let again = store.transition(post.id, PostStatus::Rejected).await;
        assert!(matches!(
            again,
            Err(CoreError::InvalidTransition {
                from: PostStatus::Verified
            })
        ));
        assert_eq!(
            store.get(post.id).await.unwrap().status,
            PostStatus::Verified
        );
    }

    #[tokio::test]
    async fn test_concurrent_transitions_one_winner() {
        let store = Arc::new(ContentStore::new());
        let post = store.insert(sample_post()).await;

        let a = {
            let store = store.clone();
            tokio::spawn(async move { store.transition(post.id, PostStatus::Verified).await })
        };
        let b = {
            let store = store.clone();
            tokio::spawn(async move { store.transition(post.id, PostStatus::Rejected).await })
        };

        let results = [a.await.unwrap(), b.await.unwrap()];
        let successes = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(successes, 1, "exactly one transition must win");

        let failure = results.iter().find(|r| r.is_err()).unwrap();
        assert!(matches!(
            failure,
            Err(CoreError::InvalidTransition { .. })
        ));

        // Final status matches whichever call completed first.
        let final_status = store.get(post.id).await.unwrap().status;
        assert!(final_status.is_terminal());
    }

    #[tokio::test]
    async fn test_increment_view_counts_each_call() {
        let store = ContentStore::new();
        let post = store.insert(sample_post()).await;

        assert_eq!(store.increment_view(post.id).await.unwrap(), 1);
        assert_eq!(store.increment_view(post.id).await.unwrap(), 2);
        assert_eq!(store.get(post.id).await.unwrap().view_count, 2);
    }

    #[tokio::test]
    async fn test_apply_changes_leaves_status_and_author() {
        let store = ContentStore::new();
        let post = store.insert(sample_post()).await;

        let updated = store
            .apply_changes(
                post.id,
                PostChanges {
                    title: Some("Bridge repairs postponed".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Bridge repairs postponed");
        assert_eq!(updated.status, PostStatus::Pending);
        assert_eq!(updated.author_id, post.author_id);
        assert!(updated.updated_at >= post.updated_at);
    }

    #[tokio::test]
    async fn test_districts_distinct_sorted() {
        let store = ContentStore::new();
        let mut a = sample_post();
        a.district = "Riverside".to_string();
        let mut b = sample_post();
        b.district = "Downtown".to_string();
        let mut c = sample_post();
        c.district = "Riverside".to_string();
        store.insert(a).await;
        store.insert(b).await;
        store.insert(c).await;

        assert_eq!(store.districts().await, vec!["Downtown", "Riverside"]);
    }
}
