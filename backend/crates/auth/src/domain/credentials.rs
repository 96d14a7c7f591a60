//! Credential check seam
//!
//! Login only needs a yes/no answer for a username/password pair. The
//! implementation lives in the infrastructure layer.

use crate::error::AuthResult;

/// Credential verifier trait
#[trait_variant::make(CredentialVerifier: Send)]
pub trait LocalCredentialVerifier {
    /// Return `true` if the pair is accepted
    async fn verify(&self, username: &str, password: &str) -> AuthResult<bool>;
}
