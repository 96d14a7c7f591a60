//! Compute Statistics Use Case
//!
//! Validates `data` and computes statistics over it as given.

use serde_json::Value;

use crate::application::MatrixReport;
use crate::domain::{Statistics, validate_matrix};
use crate::error::{MatrixError, MatrixResult};

/// Compute statistics input
pub struct StatisticsInput {
    /// Raw `data` field; anything but an array is treated as missing
    pub data: Option<Value>,
    /// Classification made before some earlier transformation
    pub original_diagonal: Option<bool>,
}

/// Compute statistics use case
#[derive(Debug, Default, Clone, Copy)]
pub struct ComputeStatisticsUseCase;

impl ComputeStatisticsUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, input: StatisticsInput) -> MatrixResult<MatrixReport> {
        let data = input
            .data
            .filter(Value::is_array)
            .ok_or(MatrixError::MissingData)?;

        let matrix = validate_matrix(&data)?;
        let statistics =
            Statistics::compute(&matrix).with_diagonal_override(input.original_diagonal);

        tracing::debug!(
            rows = matrix.row_count(),
            columns = matrix.column_count(),
            is_diagonal = statistics.is_diagonal,
            "Computed matrix statistics"
        );

        Ok(MatrixReport { matrix, statistics })
    }
}
