// HTTP routes
pub mod admin;
pub mod auth;
pub mod error;
pub mod health;
pub mod meta;
pub mod news;

pub use error::ApiError;
pub use health::*;
