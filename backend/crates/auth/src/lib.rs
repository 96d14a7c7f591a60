//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Token claims, authenticated principal, credential trait
//! - `application/` - Token service, sign-in use case, configuration
//! - `infra/` - Static credential store
//! - `presentation/` - HTTP handlers, DTOs, bearer middleware, router
//!
//! ## Features
//! - `POST /login` exchanging a username/password pair for a bearer token
//! - HS256-signed tokens carrying a `username` claim, valid for 24 hours
//! - Bearer middleware attaching the [`AuthenticatedUser`] to requests
//!
//! ## Security Model
//! - Verification is stateless; there is no revocation list
//! - Signatures and credentials are compared in constant time
//! - Exactly one credential pair is accepted (see [`StaticCredentials`])

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{AuthConfig, INSECURE_DEFAULT_SECRET};
pub use application::token_service::{IssuedToken, TokenService};
pub use domain::claims::{AuthenticatedUser, Claims};
pub use error::{AuthError, AuthResult};
pub use infra::static_credentials::StaticCredentials;
pub use presentation::middleware::require_bearer_token;
pub use presentation::router::{auth_router, auth_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::claims::*;
    pub use crate::presentation::dto::*;
}

#[cfg(test)]
mod tests;
