//! Rotate Matrix Use Case
//!
//! Rotates a matrix 90 degrees clockwise and reports statistics over the
//! rotated matrix. `isDiagonal` describes the matrix as it was received,
//! since rotation moves the main diagonal onto the anti-diagonal.

use serde_json::Value;

use crate::application::MatrixReport;
use crate::domain::{Statistics, is_diagonal, validate_matrix};
use crate::error::{MatrixError, MatrixResult};

/// Rotate matrix input
pub struct RotateInput {
    pub data: Option<Value>,
}

/// Rotate matrix use case
#[derive(Debug, Default, Clone, Copy)]
pub struct RotateMatrixUseCase;

impl RotateMatrixUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, input: RotateInput) -> MatrixResult<MatrixReport> {
        let data = input
            .data
            .filter(Value::is_array)
            .ok_or(MatrixError::MissingData)?;

        let original = validate_matrix(&data)?;
        let original_diagonal = is_diagonal(&original);
        let rotated = original.rotate_clockwise();

        let statistics =
            Statistics::compute(&rotated).with_diagonal_override(Some(original_diagonal));

        tracing::debug!(
            rows = original.row_count(),
            columns = original.column_count(),
            original_diagonal,
            "Rotated matrix"
        );

        Ok(MatrixReport {
            matrix: rotated,
            statistics,
        })
    }
}
