//! Static credential store
//!
//! Accepts exactly one configured username/password pair. A stand-in until a
//! real user store exists; passwords are compared in plain text.

use platform::crypto::constant_time_eq;

use crate::application::config::AuthConfig;
use crate::domain::credentials::CredentialVerifier;
use crate::error::AuthResult;

/// Single-pair credential verifier
#[derive(Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.username.clone(), config.password.clone())
    }
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl CredentialVerifier for StaticCredentials {
    async fn verify(&self, username: &str, password: &str) -> AuthResult<bool> {
        // Both halves are always compared.
        let user_ok = constant_time_eq(username.as_bytes(), self.username.as_bytes());
        let pass_ok = constant_time_eq(password.as_bytes(), self.password.as_bytes());
        Ok(user_ok & pass_ok)
    }
}
