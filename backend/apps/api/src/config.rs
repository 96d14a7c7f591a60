//! Server Configuration
//!
//! Read once from the environment at start-up and passed down explicitly.

use std::fmt;
use std::str::FromStr;

use anyhow::Context;
use auth::AuthConfig;
use axum::http::HeaderValue;
use matrix::MatrixConfig;
use platform::config::{env_var, parse_value, split_list};

pub const DEFAULT_PORT: u16 = 3000;

/// Deployment environment
///
/// Only `Development` exposes error details in response bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Environment::Development
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(format!("expected development or production, got {other}")),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the server needs to start
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub environment: Environment,
    /// Empty means any origin
    pub cors_origins: Vec<HeaderValue>,
    pub auth: AuthConfig,
    pub matrix: MatrixConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            environment: Environment::default(),
            cors_origins: Vec::new(),
            auth: AuthConfig::default(),
            matrix: MatrixConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load from process environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(env_var)
    }

    /// Load from an arbitrary variable source; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let mut config = ServerConfig::default();

        if let Some(raw) = lookup("PORT") {
            config.port = parse_value("PORT", &raw)?;
        }

        if let Some(raw) = lookup("APP_ENV") {
            config.environment = parse_value("APP_ENV", &raw)?;
        }

        if let Some(secret) = lookup("JWT_SECRET").or_else(|| lookup("KEY_JWT")) {
            config.auth = AuthConfig::with_secret(secret);
        }

        if let Some(raw) = lookup("CORS_ORIGINS") {
            let origins = split_list(&raw);
            // "*" anywhere in the list means any origin.
            let origins = if origins.iter().any(|o| o == "*") {
                Vec::new()
            } else {
                origins
            };
            config.cors_origins = origins
                .iter()
                .map(|origin| {
                    HeaderValue::from_str(origin)
                        .with_context(|| format!("Invalid origin in CORS_ORIGINS: {origin:?}"))
                })
                .collect::<anyhow::Result<_>>()?;
        }

        if let Some(name) = lookup("SERVICE_NAME") {
            config.matrix = MatrixConfig::with_service_name(name.trim());
        }

        Ok(config)
    }

    pub fn service_name(&self) -> &str {
        &self.matrix.service_name
    }
}
