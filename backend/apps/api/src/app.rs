//! Router Composition
//!
//! Public routes (`/health`, `/login`), the bearer-protected `/api` tree and
//! the cross-cutting layers wrapped around them.

use std::any::Any;
use std::sync::Arc;

use auth::{TokenService, auth_router, require_bearer_token};
use axum::extract::State;
use axum::http::{Method, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, middleware};
use kernel::error::app_error::{AppError, ErrorBody, SuppressedDetails};
use matrix::matrix_router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{Environment, ServerConfig};
use crate::health::health_router;

/// Build the full application router
pub fn build_router(config: &ServerConfig) -> Router {
    let tokens = Arc::new(TokenService::new(Arc::new(config.auth.clone())));

    let api = matrix_router(config.matrix.clone()).route_layer(middleware::from_fn_with_state(
        tokens.clone(),
        require_bearer_token,
    ));

    Router::new()
        .merge(health_router(config.service_name()))
        .merge(auth_router(tokens))
        .nest("/api", api)
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::map_response_with_state(
            config.environment,
            render_error_details,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.cors_origins))
}

fn cors_layer(origins: &[axum::http::HeaderValue]) -> CorsLayer {
    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins.iter().cloned())
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
}

async fn not_found() -> AppError {
    AppError::not_found("Endpoint not found")
}

pub(crate) fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "handler panicked".to_string()
    };

    AppError::internal("Internal server error")
        .with_details(details)
        .into_response()
}

/// Log suppressed error details, and show them to the client in development
pub(crate) async fn render_error_details(
    State(environment): State<Environment>,
    mut response: Response,
) -> Response {
    let Some(suppressed) = response.extensions_mut().remove::<SuppressedDetails>() else {
        return response;
    };

    let status = response.status();
    if status.is_server_error() {
        tracing::error!(
            status = status.as_u16(),
            error = %suppressed.message,
            details = %suppressed.details,
            "Request failed"
        );
    }

    if !environment.is_development() {
        return response;
    }

    let body = ErrorBody::new(suppressed.message).with_details(suppressed.details);
    (status, Json(body)).into_response()
}
