//! Matrix Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::MatrixConfig;
use crate::presentation::handlers::{self, MatrixAppState};

/// Create the Matrix router
///
/// Handlers read the caller from [`auth::AuthenticatedUser`], so the router
/// must be mounted behind [`auth::require_bearer_token`].
pub fn matrix_router(config: MatrixConfig) -> Router {
    let state = MatrixAppState {
        config: Arc::new(config),
    };

    Router::new()
        .route("/statistics", post(handlers::statistics))
        .route("/rotate", post(handlers::rotate))
        .with_state(state)
}
