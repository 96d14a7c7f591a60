//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, base64url, constant-time compare)
//! - Bearer token extraction from `Authorization` headers
//! - Environment variable parsing for start-up configuration

pub mod bearer;
pub mod config;
pub mod crypto;
