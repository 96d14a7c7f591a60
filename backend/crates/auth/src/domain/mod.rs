//! Domain Layer
//!
//! Token claims, the authenticated principal, and the credential check seam.

pub mod claims;
pub mod credentials;

// Re-exports
pub use claims::{AuthenticatedUser, Claims, TokenHeader};
pub use credentials::{CredentialVerifier, LocalCredentialVerifier};
