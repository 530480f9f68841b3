//! Current-user lookup

use crate::common::CoreError;
use crate::domains::identity::models::User;
use crate::kernel::ServerDeps;

/// Resolve a session token to its user record.
///
/// A missing, unknown, or expired token fails `SessionExpired`; the caller
/// is expected to re-authenticate.
pub async fn current_user(token: &str, deps: &ServerDeps) -> Result<User, CoreError> {
    let session = deps
        .sessions
        .get_session(token)
        .await
        .ok_or(CoreError::SessionExpired)?;

    deps.users.get(session.user_id).await
}
