use crate::common::{Actor, Role, UserId};
use crate::server::auth::SessionStore;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Authenticated user information from session
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub user_id: UserId,
    pub role: Role,
}

impl AuthUser {
    pub fn actor(&self) -> Actor {
        Actor::authenticated(self.user_id, self.role)
    }
}

/// The actor for this request: authenticated if the middleware found a live
/// session, anonymous otherwise.
pub fn actor_from(auth: Option<&AuthUser>) -> Actor {
    auth.map(AuthUser::actor).unwrap_or(Actor::Anonymous)
}

/// Middleware to extract session and populate auth user
///
/// This middleware:
/// 1. Extracts the session token from the Authorization header
/// 2. Looks up the session in the SessionStore
/// 3. Stores AuthUser in request extensions
///
/// Note: This middleware does NOT block requests - it only extracts auth
/// info. Authorization checks happen in the domain actions.
pub async fn session_auth_middleware(
    State(session_store): State<Arc<SessionStore>>,
    mut request: Request,
    next: Next,
) -> Response {
    // The token is copied out before the lookup so no request borrow is
    // held across the await (the body type keeps `&Request` from being
    // shared between threads).
    let token = bearer_token(request.headers()).map(str::to_owned);

    if let Some(token) = token {
        if let Some(session) = session_store.get_session(&token).await {
            request.extensions_mut().insert(AuthUser {
                user_id: session.user_id,
                role: session.role,
            });
        }
    }

    next.run(request).await
}

/// Pull the token out of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let auth_header = headers.get("authorization")?;
    let auth_str = auth_header.to_str().ok()?;
    Some(auth_str.strip_prefix("Bearer ").unwrap_or(auth_str))
}
