//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod sign_in;
pub mod token_service;

// Re-exports
pub use config::AuthConfig;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use token_service::{IssuedToken, TokenService};
