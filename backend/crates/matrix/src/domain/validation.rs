//! Matrix Validator
//!
//! Turns an arbitrary parsed JSON value into a [`Matrix`], reporting the first
//! violation found.
//!
//! Scan order: rows top to bottom; for each row its structure (is an array,
//! has the first row's length) first, then its elements left to right. The
//! first violation in that order is reported, so error messages are stable.

use serde_json::Value;

use super::matrix::Matrix;
use crate::error::ValidationError;

/// Validate `value` as a rectangular matrix of finite numbers
///
/// An empty top-level array is accepted and yields [`Matrix::empty`].
pub fn validate_matrix(value: &Value) -> Result<Matrix, ValidationError> {
    let raw_rows = value.as_array().ok_or(ValidationError::NotAnArray)?;

    let Some(first) = raw_rows.first() else {
        return Ok(Matrix::empty());
    };
    let expected = first
        .as_array()
        .map(Vec::len)
        .ok_or(ValidationError::RowNotArray { row: 0 })?;

    let mut rows = Vec::with_capacity(raw_rows.len());
    for (i, raw_row) in raw_rows.iter().enumerate() {
        let cells = raw_row
            .as_array()
            .ok_or(ValidationError::RowNotArray { row: i })?;

        if cells.len() != expected {
            return Err(ValidationError::RowLengthMismatch {
                row: i,
                expected,
                found: cells.len(),
            });
        }

        let row = cells
            .iter()
            .enumerate()
            .map(|(j, cell)| {
                cell.as_f64()
                    .filter(|v| v.is_finite())
                    .ok_or(ValidationError::InvalidElement { row: i, column: j })
            })
            .collect::<Result<Vec<_>, _>>()?;

        rows.push(row);
    }

    Ok(Matrix::from_checked_rows(rows, expected))
}
