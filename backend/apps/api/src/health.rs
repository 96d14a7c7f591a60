//! Health Check

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// RFC 3339, UTC, millisecond precision
    pub timestamp: String,
    pub service: String,
}

/// GET /health
async fn health(State(service): State<Arc<str>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        service: service.to_string(),
    })
}

pub fn health_router(service_name: &str) -> Router {
    Router::new()
        .route("/health", get(health))
        .with_state(Arc::<str>::from(service_name))
}
