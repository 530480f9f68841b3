//! Moderation domain: the admin-only state machine over post status.

pub mod engine;

pub use engine::{moderate, pending_queue, Decision};
