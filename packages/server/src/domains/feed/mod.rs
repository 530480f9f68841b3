//! Feed domain: filtered, paginated retrieval over verified posts.

pub mod query;

pub use query::{list_feed, FeedFilters, FeedItem, FeedPage, MAX_PER_PAGE};
