//! Auth Middleware
//!
//! Middleware for requiring a bearer token on protected routes.

use axum::body::Body;
use axum::extract::{FromRequestParts, State};
use axum::http::Request;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::application::TokenService;
use crate::domain::claims::AuthenticatedUser;
use crate::error::AuthError;

/// Middleware that requires a valid bearer token
///
/// On success the decoded [`AuthenticatedUser`]
/// is inserted into the request extensions for downstream handlers.
pub async fn require_bearer_token(
    State(tokens): State<Arc<TokenService>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, AuthError> {
    let user = tokens.authorize(req.headers())?;

    tracing::debug!(username = %user.username, "Bearer token accepted");
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

/// Extract the [`AuthenticatedUser`] placed by [`require_bearer_token`]
///
/// Absence means the route was mounted without the bearer middleware,
/// which is a wiring fault rather than a client error.
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                AuthError::Internal("route is not behind the bearer middleware".to_string())
            })
    }
}
