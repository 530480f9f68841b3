//! Registration action

use serde::Deserialize;
use tracing::info;

use crate::common::{CoreError, Role};
use crate::domains::identity::models::User;
use crate::kernel::ServerDeps;

use super::IssuedSession;

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Register a new account and issue its first session.
///
/// New accounts are always plain members. Fails `Validation` on malformed
/// input and `Conflict` when the email is already registered
/// (case-insensitively); neither failure leaves any state behind.
pub async fn register(input: RegisterInput, deps: &ServerDeps) -> Result<IssuedSession, CoreError> {
    let name = input.name.trim().to_string();
    if name.is_empty() {
        return Err(CoreError::missing_field("name"));
    }

    let email = input.email.trim().to_string();
    if email.is_empty() {
        return Err(CoreError::missing_field("email"));
    }
    if !email.contains('@') {
        return Err(CoreError::Validation(format!(
            "'{}' is not a valid email address",
            email
        )));
    }

    if input.password.is_empty() {
        return Err(CoreError::missing_field("password"));
    }

    let password_hash = deps.password_hasher.hash(&input.password);
    let user = deps
        .users
        .insert(User::new(name, email, password_hash, Role::Member))
        .await?;

    let token = deps.sessions.create_session(user.id, user.role).await;
    info!(user_id = %user.id, "User registered");

    Ok(IssuedSession { token, user })
}

/// Ensure the bootstrap admin account from config exists.
///
/// Idempotent: if the email is already registered, the existing account is
/// left untouched (including its role).
pub async fn bootstrap_admin(
    name: &str,
    email: &str,
    password: &str,
    deps: &ServerDeps,
) -> Result<(), CoreError> {
    if deps.users.find_by_email(email).await.is_some() {
        return Ok(());
    }

    let password_hash = deps.password_hasher.hash(password);
    let admin = deps
        .users
        .insert(User::new(
            name.to_string(),
            email.to_string(),
            password_hash,
            Role::Admin,
        ))
        .await?;

    info!(user_id = %admin.id, "Bootstrap admin created");
    Ok(())
}
