use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Role, UserId};

/// User - a registered account that can author posts
///
/// Immutable after registration except for `role`, which only the bootstrap
/// path assigns. Users are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,

    /// Opaque credential produced by the `PasswordHasher` collaborator.
    #[serde(skip_serializing)]
    pub password_hash: String,

    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, email: String, password_hash: String, role: Role) -> Self {
        Self {
            id: UserId::new(),
            name,
            email,
            password_hash,
            role,
            created_at: Utc::now(),
        }
    }

    /// Public projection of the account (no credential).
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            created_at: self.created_at,
        }
    }
}

/// API representation of a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}
