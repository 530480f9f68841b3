//! Server dependencies for domain actions (using traits for testability)
//!
//! This module provides the central dependency container threaded into all
//! domain actions. The stores are in-memory and shared; the credential
//! hasher is a trait abstraction to enable testing.

use std::sync::Arc;

use crate::domains::identity::store::UserStore;
use crate::domains::posts::store::ContentStore;
use crate::kernel::traits::{PasswordHasher, Sha256PasswordHasher};
use crate::server::auth::SessionStore;

/// Server dependencies accessible to domain actions
#[derive(Clone)]
pub struct ServerDeps {
    pub users: Arc<UserStore>,
    pub posts: Arc<ContentStore>,
    pub sessions: Arc<SessionStore>,
    pub password_hasher: Arc<dyn PasswordHasher>,
}

impl ServerDeps {
    /// Production dependencies: empty stores, salted SHA-256 hashing,
    /// the given session TTL.
    pub fn new(session_ttl_hours: i64) -> Self {
        Self {
            users: Arc::new(UserStore::new()),
            posts: Arc::new(ContentStore::new()),
            sessions: Arc::new(SessionStore::new(session_ttl_hours)),
            password_hasher: Arc::new(Sha256PasswordHasher),
        }
    }
}

impl Default for ServerDeps {
    fn default() -> Self {
        Self::new(24)
    }
}
