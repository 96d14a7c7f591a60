//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Fallback signing secret used when none is configured.
///
/// Anyone who knows this value can mint valid tokens. Never run a production
/// deployment on it; set `JWT_SECRET` instead.
pub const INSECURE_DEFAULT_SECRET: &str = "your-secret-key-change-in-production";

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC-SHA256 key used to sign and verify bearer tokens
    pub token_secret: Vec<u8>,
    /// Token lifetime (24 hours)
    pub token_ttl: Duration,
    /// The single accepted login name
    pub username: String,
    /// The single accepted password
    pub password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_secret: INSECURE_DEFAULT_SECRET.as_bytes().to_vec(),
            token_ttl: Duration::from_secs(24 * 3600), // 24 hours
            username: "admin".to_string(),
            password: "password".to_string(),
        }
    }
}

impl AuthConfig {
    /// Create config with the given signing secret
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: secret.into(),
            ..Default::default()
        }
    }

    /// True when tokens are signed with [`INSECURE_DEFAULT_SECRET`]
    pub fn uses_insecure_secret(&self) -> bool {
        self.token_secret == INSECURE_DEFAULT_SECRET.as_bytes()
    }

    /// Get token TTL in seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }
}
