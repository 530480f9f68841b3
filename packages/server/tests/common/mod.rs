//! Shared test harness
//!
//! Builds real dependencies (in-memory stores) plus convenience helpers for
//! seeding accounts and posts. No network, no external services.

use server_core::common::{Actor, PostId, Role, UserId};
use server_core::domains::identity::actions::{bootstrap_admin, register, RegisterInput};
use server_core::domains::posts::actions::{create_post, CreatePostInput};
use server_core::kernel::ServerDeps;

pub struct TestHarness {
    pub deps: ServerDeps,
}

#[allow(dead_code)] // not every suite uses every helper
impl TestHarness {
    pub fn new() -> Self {
        Self {
            deps: ServerDeps::default(),
        }
    }

    /// Register a member account, returning its actor and session token.
    pub async fn member(&self, name: &str, email: &str) -> (Actor, String) {
        let issued = register(
            RegisterInput {
                name: name.to_string(),
                email: email.to_string(),
                password: "test password".to_string(),
            },
            &self.deps,
        )
        .await
        .expect("Failed to register test member");

        (
            Actor::authenticated(issued.user.id, Role::Member),
            issued.token,
        )
    }

    /// Create an admin account, returning its actor and session token.
    pub async fn admin(&self, email: &str) -> (Actor, String) {
        bootstrap_admin("Test Admin", email, "admin password", &self.deps)
            .await
            .expect("Failed to bootstrap test admin");
        let user = self
            .deps
            .users
            .find_by_email(email)
            .await
            .expect("Bootstrap admin missing");

        let token = self.deps.sessions.create_session(user.id, user.role).await;
        (Actor::authenticated(user.id, Role::Admin), token)
    }

    /// An actor with no session at all.
    pub fn anonymous(&self) -> Actor {
        Actor::Anonymous
    }

    /// Submit a pending post as the given actor.
    pub async fn submit_post(&self, author: Actor, title: &str, district: &str) -> PostId {
        create_post(
            author,
            CreatePostInput {
                title: title.to_string(),
                content: "Integration test content.".to_string(),
                category: "Events".to_string(),
                district: district.to_string(),
                image_ref: None,
            },
            &self.deps,
        )
        .await
        .expect("Failed to create test post")
        .id
    }

    /// An actor for a user that was never registered (dangling id).
    pub fn unregistered_member(&self) -> Actor {
        Actor::authenticated(UserId::new(), Role::Member)
    }
}
