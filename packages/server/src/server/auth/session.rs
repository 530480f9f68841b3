use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::common::{Role, UserId};

/// Session token (random UUID)
pub type SessionToken = String;

/// Session data stored after a successful login or registration
///
/// The role is a snapshot taken at issue time and stays authoritative for
/// the session's lifetime; a privilege change requires a new session.
#[derive(Clone, Debug)]
pub struct Session {
    pub user_id: UserId,
    pub role: Role,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// In-memory session store
///
/// Sessions expire after the configured TTL; expired entries simply fail
/// lookups and are pruned opportunistically.
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionToken, Session>>>,
    ttl_hours: i64,
}

impl SessionStore {
    pub fn new(ttl_hours: i64) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl_hours,
        }
    }

    /// Create a new session and return the token
    pub async fn create_session(&self, user_id: UserId, role: Role) -> SessionToken {
        let token = Uuid::new_v4().to_string();
        let session = Session {
            user_id,
            role,
            created_at: chrono::Utc::now(),
        };
        let mut sessions = self.sessions.write().await;
        sessions.insert(token.clone(), session);
        token
    }

    /// Get session by token
    ///
    /// Returns `None` for unknown and for expired tokens alike.
    pub async fn get_session(&self, token: &str) -> Option<Session> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(token)?;

        let now = chrono::Utc::now();
        let elapsed = now.signed_duration_since(session.created_at);
        if elapsed.num_hours() >= self.ttl_hours {
            // Session expired
            return None;
        }

        Some(session.clone())
    }

    /// Delete session (logout)
    pub async fn delete_session(&self, token: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token);
    }

    /// Clean up expired sessions (run periodically)
    pub async fn cleanup_expired(&self) {
        let mut sessions = self.sessions.write().await;
        let now = chrono::Utc::now();

        sessions.retain(|_, session| {
            let elapsed = now.signed_duration_since(session.created_at);
            elapsed.num_hours() < self.ttl_hours
        });
    }
}
