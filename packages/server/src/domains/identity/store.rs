//! In-memory user store
//!
//! Users keyed by id with a unique, case-insensitive index on email. The
//! uniqueness check and the insert happen under one write-lock acquisition,
//! so two concurrent registrations with the same email cannot both succeed.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::common::{CoreError, UserId};

use super::models::User;

#[derive(Default)]
struct UserIndex {
    by_id: HashMap<UserId, User>,
    // lowercased email -> user id
    by_email: HashMap<String, UserId>,
}

pub struct UserStore {
    inner: Arc<RwLock<UserIndex>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(UserIndex::default())),
        }
    }

    /// Insert a new user, enforcing email uniqueness (case-insensitive).
    pub async fn insert(&self, user: User) -> Result<User, CoreError> {
        let key = user.email.to_lowercase();
        let mut index = self.inner.write().await;

        if index.by_email.contains_key(&key) {
            return Err(CoreError::Conflict(format!(
                "email {} is already registered",
                user.email
            )));
        }

        index.by_email.insert(key, user.id);
        index.by_id.insert(user.id, user.clone());
        Ok(user)
    }

    pub async fn get(&self, id: UserId) -> Result<User, CoreError> {
        let index = self.inner.read().await;
        index
            .by_id
            .get(&id)
            .cloned()
            .ok_or(CoreError::NotFound("user"))
    }

    /// Look up a user by email, case-insensitively.
    pub async fn find_by_email(&self, email: &str) -> Option<User> {
        let index = self.inner.read().await;
        let id = index.by_email.get(&email.to_lowercase())?;
        index.by_id.get(id).cloned()
    }

    pub async fn count(&self) -> usize {
        let index = self.inner.read().await;
        index.by_id.len()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
