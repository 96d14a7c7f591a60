//! Auth Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::TokenService;
use crate::domain::credentials::CredentialVerifier;
use crate::infra::static_credentials::StaticCredentials;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router backed by the configured static credential pair
pub fn auth_router(tokens: Arc<TokenService>) -> Router {
    let credentials = StaticCredentials::from_config(tokens.config());
    auth_router_generic(credentials, tokens)
}

/// Create a generic Auth router for any credential verifier
pub fn auth_router_generic<C>(credentials: C, tokens: Arc<TokenService>) -> Router
where
    C: CredentialVerifier + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        credentials: Arc::new(credentials),
        tokens,
    };

    Router::new()
        .route("/login", post(handlers::login::<C>))
        .with_state(state)
}
