//! Posts actions
//!
//! Entry-point actions are called directly from the HTTP handlers. Each one
//! consults the capability layer before touching the store, so a failed
//! check never leaves a side effect.

mod create_post;
mod delete_post;
mod get_post;
mod update_post;

pub use create_post::{create_post, CreatePostInput};
pub use delete_post::delete_post;
pub use get_post::get_post;
pub use update_post::{update_post, UpdatePostInput};
