//! Identity actions
//!
//! Register and login both end with exactly one issued session; any failure
//! leaves no session and no partial user record.

mod current_user;
mod login;
mod register;

pub use current_user::current_user;
pub use login::{login, LoginInput};
pub use register::{bootstrap_admin, register, RegisterInput};

use crate::server::auth::SessionToken;

use super::models::User;

/// A freshly issued session together with the account it belongs to.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub token: SessionToken,
    pub user: User,
}
