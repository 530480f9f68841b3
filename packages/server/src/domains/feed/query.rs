//! Public feed query
//!
//! Only verified posts ever appear here, for any caller and any filter
//! combination. Filters are exact matches and independent; ordering is
//! newest-first with ids breaking timestamp ties for determinism.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::common::{CoreError, PostId, UserId};
use crate::domains::posts::models::{Category, NewsPost, PostStatus};
use crate::kernel::ServerDeps;

/// Upper bound on caller-supplied page size.
pub const MAX_PER_PAGE: usize = 100;

/// Optional feed filters; both are exact matches, intersected when both
/// are present.
#[derive(Debug, Clone, Default)]
pub struct FeedFilters {
    pub district: Option<String>,
    pub category: Option<Category>,
}

/// Feed listing entry: the summary projection of a verified post.
#[derive(Debug, Clone, Serialize)]
pub struct FeedItem {
    pub id: PostId,
    pub title: String,
    pub category: Category,
    pub district: String,
    pub image_ref: Option<String>,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub view_count: u64,
}

impl From<NewsPost> for FeedItem {
    fn from(post: NewsPost) -> Self {
        Self {
            id: post.id,
            title: post.title,
            category: post.category,
            district: post.district,
            image_ref: post.image_ref,
            author_id: post.author_id,
            created_at: post.created_at,
            view_count: post.view_count,
        }
    }
}

/// One page of the feed.
#[derive(Debug, Clone, Serialize)]
pub struct FeedPage {
    pub items: Vec<FeedItem>,
    pub total: usize,
    pub pages: usize,
    pub current_page: usize,
}

/// List the public feed.
///
/// `page` and `per_page` are 1-based and must be positive; `per_page` is
/// clamped to [`MAX_PER_PAGE`]. A page past the end returns an empty item
/// list rather than failing.
pub async fn list_feed(
    filters: FeedFilters,
    page: usize,
    per_page: usize,
    deps: &ServerDeps,
) -> Result<FeedPage, CoreError> {
    if page == 0 {
        return Err(CoreError::Validation("page must be positive".to_string()));
    }
    if per_page == 0 {
        return Err(CoreError::Validation(
            "per_page must be positive".to_string(),
        ));
    }
    let per_page = per_page.min(MAX_PER_PAGE);

    let mut posts: Vec<NewsPost> = deps
        .posts
        .by_status(PostStatus::Verified)
        .await
        .into_iter()
        .filter(|post| {
            filters
                .district
                .as_ref()
                .map_or(true, |d| post.district == *d)
        })
        .filter(|post| filters.category.map_or(true, |c| post.category == c))
        .collect();

    // Newest first; id desc breaks created_at ties deterministically.
    posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

    let total = posts.len();
    let pages = total.div_ceil(per_page);

    let items = posts
        .into_iter()
        .skip((page - 1).saturating_mul(per_page))
        .take(per_page)
        .map(FeedItem::from)
        .collect();

    Ok(FeedPage {
        items,
        total,
        pages,
        current_page: page,
    })
}
