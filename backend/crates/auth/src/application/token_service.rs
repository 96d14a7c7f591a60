//! Token Service
//!
//! Issues and verifies signed, time-limited bearer tokens.
//!
//! Tokens are compact HS256 JWS strings:
//! `base64url(header) "." base64url(claims) "." base64url(hmac_sha256(secret, header "." claims))`.
//! Verification is stateless: a pure function of the token, the clock, and
//! the configured secret.

use std::sync::Arc;

use axum::http::HeaderMap;
use chrono::{DateTime, Utc};
use platform::bearer::extract_bearer_token;
use platform::crypto::{from_base64url, hmac_sha256, to_base64url, verify_hmac_sha256};
use serde::de::DeserializeOwned;

use crate::application::config::AuthConfig;
use crate::domain::claims::{AuthenticatedUser, Claims, TokenHeader};
use crate::error::{AuthError, AuthResult};

/// A freshly signed token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Token issuing and verification service
#[derive(Debug, Clone)]
pub struct TokenService {
    config: Arc<AuthConfig>,
}

impl TokenService {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Issue a token for `username`, expiring after the configured TTL
    pub fn issue(&self, username: &str) -> AuthResult<IssuedToken> {
        self.issue_at(username, Utc::now())
    }

    pub fn issue_at(&self, username: &str, now: DateTime<Utc>) -> AuthResult<IssuedToken> {
        if username.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let ttl = chrono::Duration::from_std(self.config.token_ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid token TTL: {e}")))?;
        let claims = Claims::new(username, now, ttl);

        let header = encode_segment(&TokenHeader::hs256())?;
        let payload = encode_segment(&claims)?;
        let signing_input = format!("{header}.{payload}");
        let signature = hmac_sha256(&self.config.token_secret, signing_input.as_bytes());

        let expires_at = claims
            .expires_at()
            .ok_or_else(|| AuthError::Internal("Token expiry out of range".to_string()))?;

        Ok(IssuedToken {
            token: format!("{signing_input}.{}", to_base64url(&signature)),
            expires_at,
        })
    }

    /// Verify a raw token (already stripped of its `Bearer ` prefix)
    pub fn verify(&self, token: &str) -> AuthResult<AuthenticatedUser> {
        self.verify_at(token, Utc::now())
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<AuthenticatedUser> {
        let mut segments = token.split('.');
        let (Some(header), Some(payload), Some(signature), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(reject("wrong segment count"));
        };

        let signature = from_base64url(signature).map_err(|_| reject("signature not base64url"))?;
        let signing_input = &token[..header.len() + 1 + payload.len()];
        if !verify_hmac_sha256(
            &self.config.token_secret,
            signing_input.as_bytes(),
            &signature,
        ) {
            return Err(reject("signature mismatch"));
        }

        let header: TokenHeader = decode_segment(header)?;
        if !header.is_hs256() {
            return Err(reject("unexpected algorithm"));
        }

        let claims: Claims = decode_segment(payload)?;
        if claims.is_expired_at(now) {
            return Err(reject("expired"));
        }
        if claims.username.is_empty() {
            return Err(reject("empty username claim"));
        }

        Ok(claims.into())
    }

    /// Extract the bearer token from `headers` and verify it
    pub fn authorize(&self, headers: &HeaderMap) -> AuthResult<AuthenticatedUser> {
        let token = extract_bearer_token(headers)?;
        self.verify(token)
    }
}

fn reject(reason: &'static str) -> AuthError {
    tracing::debug!(reason, "Token verification failed");
    AuthError::InvalidOrExpiredToken
}

fn encode_segment<T: serde::Serialize>(value: &T) -> AuthResult<String> {
    let json = serde_json::to_vec(value)
        .map_err(|e| AuthError::Internal(format!("Token encoding failed: {e}")))?;
    Ok(to_base64url(&json))
}

fn decode_segment<T: DeserializeOwned>(segment: &str) -> AuthResult<T> {
    let bytes = from_base64url(segment).map_err(|_| reject("segment not base64url"))?;
    serde_json::from_slice(&bytes).map_err(|_| reject("segment not valid JSON"))
}
