//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use std::sync::Arc;

use crate::application::{SignInInput, SignInUseCase, TokenService};
use crate::domain::credentials::CredentialVerifier;
use crate::error::AuthResult;
use crate::presentation::dto::{LoginRequest, LoginResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<C>
where
    C: CredentialVerifier + Clone + Send + Sync + 'static,
{
    pub credentials: Arc<C>,
    pub tokens: Arc<TokenService>,
}

/// POST /login
pub async fn login<C>(
    State(state): State<AuthAppState<C>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> AuthResult<Json<LoginResponse>>
where
    C: CredentialVerifier + Clone + Send + Sync + 'static,
{
    let req = kernel::error::conversions::json_body_or_default(body)?;

    let use_case = SignInUseCase::new(state.credentials.clone(), state.tokens.clone());

    let input = SignInInput {
        username: req.username,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(LoginResponse {
        token: output.token,
    }))
}
