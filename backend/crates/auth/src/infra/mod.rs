//! Infrastructure Layer
//!
//! Implementations of domain traits.

pub mod static_credentials;

pub use static_credentials::StaticCredentials;
