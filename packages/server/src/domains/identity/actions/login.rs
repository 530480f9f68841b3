//! Login action

use serde::Deserialize;
use tracing::{info, warn};

use crate::common::CoreError;
use crate::kernel::ServerDeps;

use super::IssuedSession;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// Authenticate with email and password, issuing one session on success.
///
/// Unknown email and wrong password produce the same `Auth` error, so the
/// response does not reveal which emails are registered.
pub async fn login(input: LoginInput, deps: &ServerDeps) -> Result<IssuedSession, CoreError> {
    let user = match deps.users.find_by_email(input.email.trim()).await {
        Some(user) => user,
        None => {
            warn!("Login attempt for unknown email");
            return Err(CoreError::Auth("invalid email or password".to_string()));
        }
    };

    if !deps
        .password_hasher
        .verify(&input.password, &user.password_hash)
    {
        warn!(user_id = %user.id, "Login attempt with wrong password");
        return Err(CoreError::Auth("invalid email or password".to_string()));
    }

    let token = deps.sessions.create_session(user.id, user.role).await;
    info!(user_id = %user.id, "User logged in");

    Ok(IssuedSession { token, user })
}
