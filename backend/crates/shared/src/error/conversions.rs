//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`]
//! and renders [`AppError`] as an HTTP response.

use super::app_error::AppError;

// ============================================================================
// serde_json conversions
// ============================================================================

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_data() || err.is_eof() {
            AppError::bad_request("Invalid JSON format").with_source(err)
        } else {
            AppError::internal("Internal server error").with_source(err)
        }
    }
}

// ============================================================================
// Axum conversions (feature-gated)
// ============================================================================

#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        use super::kind::ErrorKind;
        use axum::extract::rejection::JsonRejection;

        let details = rejection.body_text();
        let err = match rejection {
            other if other.status() == http::StatusCode::PAYLOAD_TOO_LARGE => {
                AppError::new(ErrorKind::PayloadTooLarge, "Request body too large")
            }
            _ => AppError::bad_request("Invalid JSON format"),
        };
        err.with_details(details)
    }
}

/// Unwrap a JSON body, reading a non-JSON `Content-Type` as an empty body
///
/// The handler then reports the missing fields itself, with its own message.
#[cfg(feature = "axum")]
pub fn json_body_or_default<T: Default>(
    body: Result<axum::Json<T>, axum::extract::rejection::JsonRejection>,
) -> Result<T, AppError> {
    use axum::extract::rejection::JsonRejection;

    match body {
        Ok(axum::Json(value)) => Ok(value),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(rejection.into()),
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use super::app_error::SuppressedDetails;
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = (status, Json(self.body())).into_response();

        if let Some(details) = self.details() {
            response.extensions_mut().insert(SuppressedDetails {
                message: self.message().to_string(),
                details: details.to_string(),
            });
        }

        response
    }
}
