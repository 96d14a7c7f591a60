//! Bearer token extraction
//!
//! Pulls the raw token out of an `Authorization: Bearer <token>` header.
//! Verification of the token itself is the caller's business.

use axum::http::{HeaderMap, header};

/// Error when extracting a bearer token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BearerError {
    /// No `Authorization` header at all
    #[error("Missing authorization header")]
    MissingHeader,

    /// Header present but not `Bearer <token>`
    #[error("Invalid authorization header format")]
    Malformed,
}

/// Extract the bearer token from request headers
///
/// ## Arguments
/// * `headers` - HTTP request headers
///
/// ## Returns
/// * `Ok(&str)` - the token, without the scheme prefix
/// * `Err(BearerError::MissingHeader)` - no `Authorization` header
/// * `Err(BearerError::Malformed)` - non-UTF-8 value, wrong scheme, or empty token
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::MissingHeader)?;

    let value = value.to_str().map_err(|_| BearerError::Malformed)?;
    parse_bearer(value)
}

/// Parse a raw `Authorization` header value
///
/// The scheme is matched case-insensitively (RFC 7235); exactly one token
/// must follow it.
pub fn parse_bearer(value: &str) -> Result<&str, BearerError> {
    let mut parts = value.split_whitespace();

    let scheme = parts.next().ok_or(BearerError::Malformed)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(BearerError::Malformed);
    }

    let token = parts.next().ok_or(BearerError::Malformed)?;
    if parts.next().is_some() {
        return Err(BearerError::Malformed);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_extract_bearer_token() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(extract_bearer_token(&headers), Ok("abc.def.ghi"));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let headers = headers_with("bearer abc");
        assert_eq!(extract_bearer_token(&headers), Ok("abc"));
    }

    #[test]
    fn test_missing_header() {
        let headers = HeaderMap::new();
        assert_eq!(
            extract_bearer_token(&headers),
            Err(BearerError::MissingHeader)
        );
    }

    #[test]
    fn test_malformed_headers() {
        for value in ["Bearer", "Bearer ", "Basic YWRtaW46cGFzc3dvcmQ=", "abc.def.ghi", "Bearer a b", ""] {
            assert_eq!(parse_bearer(value), Err(BearerError::Malformed), "{value:?}");
        }
    }
}
