//! Sign In Use Case
//!
//! Checks a username/password pair and issues a bearer token.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::token_service::TokenService;
use crate::domain::credentials::CredentialVerifier;
use crate::error::{AuthError, AuthResult};

/// Sign in input
///
/// Fields are optional because the login body may omit either of them.
pub struct SignInInput {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Sign in output
pub struct SignInOutput {
    /// Signed bearer token
    pub token: String,
    pub username: String,
    pub expires_at: DateTime<Utc>,
}

/// Sign in use case
pub struct SignInUseCase<C>
where
    C: CredentialVerifier,
{
    credentials: Arc<C>,
    tokens: Arc<TokenService>,
}

impl<C> SignInUseCase<C>
where
    C: CredentialVerifier,
{
    pub fn new(credentials: Arc<C>, tokens: Arc<TokenService>) -> Self {
        Self {
            credentials,
            tokens,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        let (Some(username), Some(password)) = (
            input.username.filter(|u| !u.is_empty()),
            input.password.filter(|p| !p.is_empty()),
        ) else {
            return Err(AuthError::MissingCredentials);
        };

        if !self.credentials.verify(&username, &password).await? {
            return Err(AuthError::InvalidCredentials);
        }

        let issued = self.tokens.issue(&username)?;

        tracing::info!(
            username = %username,
            expires_at = %issued.expires_at,
            "User signed in"
        );

        Ok(SignInOutput {
            token: issued.token,
            username,
            expires_at: issued.expires_at,
        })
    }
}
