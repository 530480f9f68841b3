use thiserror::Error;

use crate::domains::posts::models::PostStatus;

/// Error kinds surfaced by every core operation.
///
/// Each variant maps to a distinct caller obligation: correct the input,
/// re-authenticate, use a different actor, or give up (terminal state).
/// No operation partially applies its effect before returning one of these.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("Permission denied: {0}")]
    Forbidden(String),

    #[error("Invalid transition: post is already {from}")]
    InvalidTransition { from: PostStatus },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Session expired or invalid")]
    SessionExpired,
}

impl CoreError {
    /// Shorthand for a validation failure on a named field.
    pub fn missing_field(field: &str) -> Self {
        Self::Validation(format!("{} is required", field))
    }
}
