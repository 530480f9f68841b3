//! Typed ID definitions for all domain entities.
//!
//! This module defines type aliases for each domain entity, providing
//! compile-time type safety for ID usage throughout the application.
//!
//! # Example
//!
//! ```rust
//! use server_core::common::{PostId, UserId};
//!
//! // These are incompatible types - compiler prevents mixing them up
//! let user_id: UserId = UserId::new();
//! let post_id: PostId = PostId::new();
//!
//! // This would be a compile error:
//! // let wrong: PostId = user_id;
//! ```

// Re-export the core Id type and version markers
pub use super::id::{Id, V7};

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for User entities (registered accounts).
pub struct User;

/// Marker type for NewsPost entities (submitted news items).
pub struct NewsPost;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for User entities.
pub type UserId = Id<User>;

/// Typed ID for NewsPost entities.
pub type PostId = Id<NewsPost>;
