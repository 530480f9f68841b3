use crate::common::entity_ids::UserId;
use crate::common::errors::CoreError;
use crate::domains::posts::models::{NewsPost, PostStatus};

use super::Role;

/// Capabilities in the NeighborNews platform
///
/// Post-scoped capabilities (`Delete`, `ViewDetail`) are checked against a
/// specific post; the rest depend only on the actor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Submit a new post
    CreatePost,

    /// Verify or reject pending posts
    Moderate,

    /// View the moderation dashboard statistics
    ViewStats,
}

/// The identity performing an operation, possibly anonymous.
///
/// Built once per request from the session (or its absence) and threaded
/// explicitly into every core operation - there is no ambient current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Anonymous,
    Authenticated { user_id: UserId, role: Role },
}

impl Actor {
    pub fn authenticated(user_id: UserId, role: Role) -> Self {
        Self::Authenticated { user_id, role }
    }

    /// The actor's user id, if authenticated.
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Actor::Anonymous => None,
            Actor::Authenticated { user_id, .. } => Some(*user_id),
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(
            self,
            Actor::Authenticated {
                role: Role::Admin,
                ..
            }
        )
    }

    /// Specify what capability the actor needs
    pub fn can(&self, capability: Capability) -> CapabilityCheck {
        CapabilityCheck {
            actor: *self,
            capability,
        }
    }

    /// True if the actor may delete the given post (author or admin).
    pub fn can_delete(&self, post: &NewsPost) -> bool {
        match self {
            Actor::Anonymous => false,
            Actor::Authenticated { user_id, role } => {
                role.is_admin() || *user_id == post.author_id
            }
        }
    }

    /// True if the actor may edit the given post (author or admin).
    pub fn can_edit(&self, post: &NewsPost) -> bool {
        self.can_delete(post)
    }

    /// True if the actor may see the post's detail view.
    ///
    /// Verified posts are public; pending/rejected posts are visible only
    /// to their author and to admins.
    pub fn can_view_detail(&self, post: &NewsPost) -> bool {
        post.status == PostStatus::Verified
            || self.is_admin()
            || self.user_id() == Some(post.author_id)
    }
}

/// Check after specifying capability
pub struct CapabilityCheck {
    actor: Actor,
    capability: Capability,
}

impl CapabilityCheck {
    /// Perform the authorization check.
    ///
    /// Returns `Forbidden` when the actor lacks the capability; the check
    /// itself has no side effect.
    pub fn check(self) -> Result<(), CoreError> {
        let allowed = match self.capability {
            Capability::CreatePost => self.actor.user_id().is_some(),
            Capability::Moderate | Capability::ViewStats => self.actor.is_admin(),
        };

        if allowed {
            Ok(())
        } else {
            Err(CoreError::Forbidden(match self.capability {
                Capability::CreatePost => "authentication required to create posts".to_string(),
                Capability::Moderate => "admin access required to moderate posts".to_string(),
                Capability::ViewStats => "admin access required to view stats".to_string(),
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::posts::models::Category;

    fn post_by(author_id: UserId, status: PostStatus) -> NewsPost {
        let mut post = NewsPost::new(
            author_id,
            "Road closed on Main St".to_string(),
            "Resurfacing works until Friday.".to_string(),
            Category::Transport,
            "Downtown".to_string(),
            None,
        );
        post.status = status;
        post
    }

    #[test]
    fn admin_can_moderate() {
        let admin = Actor::authenticated(UserId::new(), Role::Admin);
        assert!(admin.can(Capability::Moderate).check().is_ok());
        assert!(admin.can(Capability::ViewStats).check().is_ok());
    }

    #[test]
    fn member_cannot_moderate() {
        let member = Actor::authenticated(UserId::new(), Role::Member);
        let result = member.can(Capability::Moderate).check();
        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[test]
    fn anonymous_cannot_create() {
        let result = Actor::Anonymous.can(Capability::CreatePost).check();
        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[test]
    fn author_can_delete_own_post_only() {
        let author = UserId::new();
        let post = post_by(author, PostStatus::Pending);

        let owner = Actor::authenticated(author, Role::Member);
        let other = Actor::authenticated(UserId::new(), Role::Member);
        let admin = Actor::authenticated(UserId::new(), Role::Admin);

        assert!(owner.can_delete(&post));
        assert!(!other.can_delete(&post));
        assert!(admin.can_delete(&post));
        assert!(!Actor::Anonymous.can_delete(&post));
    }

    #[test]
    fn pending_detail_visible_to_author_and_admin_only() {
        let author = UserId::new();
        let pending = post_by(author, PostStatus::Pending);

        assert!(Actor::authenticated(author, Role::Member).can_view_detail(&pending));
        assert!(Actor::authenticated(UserId::new(), Role::Admin).can_view_detail(&pending));
        assert!(!Actor::authenticated(UserId::new(), Role::Member).can_view_detail(&pending));
        assert!(!Actor::Anonymous.can_view_detail(&pending));
    }

    #[test]
    fn verified_detail_visible_to_everyone() {
        let verified = post_by(UserId::new(), PostStatus::Verified);
        assert!(Actor::Anonymous.can_view_detail(&verified));
    }
}
