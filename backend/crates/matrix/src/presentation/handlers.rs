//! HTTP Handlers

use auth::AuthenticatedUser;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use kernel::error::conversions::json_body_or_default;
use std::sync::Arc;

use crate::application::{
    ComputeStatisticsUseCase, MatrixConfig, MatrixReport, RotateInput, RotateMatrixUseCase,
    StatisticsInput,
};
use crate::error::MatrixResult;
use crate::presentation::dto::{
    MatrixResponse, RotateRequest, StatisticsDto, StatisticsRequest, matrix_to_json,
};

/// Shared state for matrix handlers
#[derive(Clone)]
pub struct MatrixAppState {
    pub config: Arc<MatrixConfig>,
}

impl MatrixAppState {
    fn respond(&self, report: MatrixReport, user: AuthenticatedUser) -> Json<MatrixResponse> {
        Json(MatrixResponse {
            rotated_matrix: matrix_to_json(&report.matrix),
            statistics: StatisticsDto::from(&report.statistics),
            processed_by: self.config.service_name.clone(),
            user: user.username,
        })
    }
}

/// POST /api/statistics
pub async fn statistics(
    State(state): State<MatrixAppState>,
    user: AuthenticatedUser,
    body: Result<Json<StatisticsRequest>, JsonRejection>,
) -> MatrixResult<Json<MatrixResponse>> {
    let req = json_body_or_default(body)?;

    let report = ComputeStatisticsUseCase::new().execute(StatisticsInput {
        data: req.data,
        original_diagonal: req.original_diagonal,
    })?;

    tracing::info!(
        username = %user.username,
        elements = report.statistics.element_count,
        "Statistics computed"
    );

    Ok(state.respond(report, user))
}

/// POST /api/rotate
pub async fn rotate(
    State(state): State<MatrixAppState>,
    user: AuthenticatedUser,
    body: Result<Json<RotateRequest>, JsonRejection>,
) -> MatrixResult<Json<MatrixResponse>> {
    let req = json_body_or_default(body)?;

    let report = RotateMatrixUseCase::new().execute(RotateInput { data: req.data })?;

    tracing::info!(
        username = %user.username,
        elements = report.statistics.element_count,
        "Matrix rotated"
    );

    Ok(state.respond(report, user))
}
