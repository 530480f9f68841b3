use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::common::{PostId, UserId};

/// Maximum title length accepted at creation and update.
pub const MAX_TITLE_LEN: usize = 200;

/// NewsPost - a single submitted news item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsPost {
    pub id: PostId,

    // Content
    pub title: String,
    pub content: String,
    pub category: Category,
    pub district: String,

    // Optional opaque reference into external image storage
    pub image_ref: Option<String>,

    // Authorship (immutable after creation)
    pub author_id: UserId,

    // Moderation
    pub status: PostStatus,

    // Display metric, only ever grows
    pub view_count: u64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewsPost {
    /// Build a freshly submitted post: always `Pending`, zero views.
    pub fn new(
        author_id: UserId,
        title: String,
        content: String,
        category: Category,
        district: String,
        image_ref: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: PostId::new(),
            title,
            content,
            category,
            district,
            image_ref,
            author_id,
            status: PostStatus::Pending,
            view_count: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

// =============================================================================
// Enums
// =============================================================================

/// Moderation status of a post.
///
/// Starts at `Pending`; the moderation engine moves it exactly once to one
/// of the terminal states. Nothing transitions out of a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Pending,
    Verified,
    Rejected,
}

impl PostStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, PostStatus::Pending)
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostStatus::Pending => write!(f, "pending"),
            PostStatus::Verified => write!(f, "verified"),
            PostStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Closed category enum.
///
/// An unrecognized category fails validation at creation time; there is no
/// silent fallback, since that would corrupt the stored data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Outdoors,
    Transport,
    Events,
    Danger,
    Announcements,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 5] = [
        Category::Outdoors,
        Category::Transport,
        Category::Events,
        Category::Danger,
        Category::Announcements,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Outdoors => "Outdoors",
            Category::Transport => "Transport",
            Category::Events => "Events",
            Category::Danger => "Danger",
            Category::Announcements => "Announcements",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Outdoors" => Ok(Category::Outdoors),
            "Transport" => Ok(Category::Transport),
            "Events" => Ok(Category::Events),
            "Danger" => Ok(Category::Danger),
            "Announcements" => Ok(Category::Announcements),
            _ => Err(()),
        }
    }
}
