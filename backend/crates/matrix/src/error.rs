//! Matrix Error Types
//!
//! This module provides matrix-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Matrix-specific result type alias
pub type MatrixResult<T> = Result<T, MatrixError>;

/// Why an input was not accepted as a matrix
///
/// Every variant names the first offending position in row-major scan order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Top-level value is not an array
    #[error("Input must be an array")]
    NotAnArray,

    /// A row is not an array
    #[error("Row {row} is not an array")]
    RowNotArray { row: usize },

    /// A row's length differs from the first row's
    #[error("All rows must have the same length (row {row} has {found} elements, expected {expected})")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// An element is not a finite number
    #[error("Element at [{row}][{column}] is not a valid number")]
    InvalidElement { row: usize, column: usize },
}

/// Matrix endpoint error variants
#[derive(Debug, Error)]
pub enum MatrixError {
    /// Body has no `data` array at all
    #[error("Invalid input. Expected an object with a \"data\" property containing an array of arrays.")]
    MissingData,

    /// `data` is present but is not a well-formed matrix
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Request body could not be read as JSON
    #[error(transparent)]
    Request(#[from] AppError),
}

impl MatrixError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            MatrixError::MissingData | MatrixError::Validation(_) => StatusCode::BAD_REQUEST,
            MatrixError::Request(err) => {
                StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_REQUEST)
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatrixError::MissingData | MatrixError::Validation(_) => ErrorKind::BadRequest,
            MatrixError::Request(err) => err.kind(),
        }
    }

    /// Convert to AppError
    pub fn into_app_error(self) -> AppError {
        match self {
            MatrixError::Request(err) => err,
            other => AppError::new(other.kind(), other.to_string()),
        }
    }
}

impl IntoResponse for MatrixError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Matrix request rejected");
        self.into_app_error().into_response()
    }
}
