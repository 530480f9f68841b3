//! Posts domain: the canonical set of news posts and their status.
//!
//! `ContentStore` owns post state; actions are the entry points called from
//! the HTTP layer and consult the capability layer before mutating.

pub mod actions;
pub mod models;
pub mod store;

pub use models::{Category, NewsPost, PostStatus};
pub use store::ContentStore;
