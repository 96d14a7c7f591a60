//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::bearer::BearerError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
///
/// Closed set: every variant maps to exactly one HTTP status.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No `Authorization` header on a protected request
    #[error("Missing authorization header")]
    MissingToken,

    /// `Authorization` header present but not `Bearer <token>`
    #[error("Invalid authorization header format")]
    MalformedHeader,

    /// Signature mismatch, undecodable token, or expiry passed
    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,

    /// Username/password pair not accepted
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Login body lacks a username or a password
    #[error("Username and password are required")]
    MissingCredentials,

    /// Request body could not be read as JSON
    #[error(transparent)]
    Request(#[from] AppError),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken
            | AuthError::MalformedHeader
            | AuthError::InvalidOrExpiredToken
            | AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::MissingCredentials => StatusCode::BAD_REQUEST,
            AuthError::Request(err) => {
                StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_REQUEST)
            }
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingToken
            | AuthError::MalformedHeader
            | AuthError::InvalidOrExpiredToken
            | AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::MissingCredentials => ErrorKind::BadRequest,
            AuthError::Request(err) => err.kind(),
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    ///
    /// Internal messages are kept out of the client-facing message and
    /// travel as details instead.
    pub fn into_app_error(self) -> AppError {
        match self {
            AuthError::Request(err) => err,
            AuthError::Internal(msg) => {
                AppError::internal("Internal server error during authentication")
                    .with_details(msg)
            }
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::InvalidOrExpiredToken => {
                tracing::warn!("Rejected bearer token");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}

impl From<BearerError> for AuthError {
    fn from(err: BearerError) -> Self {
        match err {
            BearerError::MissingHeader => AuthError::MissingToken,
            BearerError::Malformed => AuthError::MalformedHeader,
        }
    }
}
