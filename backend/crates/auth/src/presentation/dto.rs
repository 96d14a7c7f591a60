//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// Login request
///
/// Both fields are optional at the wire level so that a missing field is
/// reported as 400 rather than as a JSON error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
}
