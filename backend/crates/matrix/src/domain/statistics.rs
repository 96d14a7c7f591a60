//! Statistics Engine
//!
//! Aggregates over an already validated [`Matrix`]. Everything here is a pure
//! function of its input.

use super::matrix::{Dimensions, Matrix};

/// Aggregates computed for one matrix
///
/// `None` aggregates mean "no elements"; they are only produced together with
/// `element_count == 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub max_value: Option<f64>,
    pub min_value: Option<f64>,
    pub total_sum: Option<f64>,
    /// Rounded to two decimal places
    pub average: Option<f64>,
    pub element_count: usize,
    pub dimensions: Option<Dimensions>,
    pub is_diagonal: bool,
}

impl Statistics {
    /// Result for a matrix without elements
    pub fn empty() -> Self {
        Self {
            max_value: None,
            min_value: None,
            total_sum: None,
            average: None,
            element_count: 0,
            dimensions: None,
            is_diagonal: false,
        }
    }

    /// Single pass over the elements in row-major order
    pub fn compute(matrix: &Matrix) -> Self {
        let element_count = matrix.element_count();
        if element_count == 0 {
            return Self::empty();
        }

        let (min, max, sum) = matrix.values().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), v| (min.min(v), max.max(v), sum + v),
        );

        Self {
            max_value: Some(max),
            min_value: Some(min),
            total_sum: Some(sum),
            average: Some(round_to_cents(sum / element_count as f64)),
            element_count,
            dimensions: matrix.dimensions(),
            is_diagonal: is_diagonal(matrix),
        }
    }

    /// Replace `is_diagonal` with a classification made elsewhere
    ///
    /// The override is taken as given, without checking it against the matrix.
    pub fn with_diagonal_override(mut self, original_diagonal: Option<bool>) -> Self {
        if let Some(flag) = original_diagonal {
            self.is_diagonal = flag;
        }
        self
    }
}

/// True iff the matrix is square and every off-diagonal element is zero
pub fn is_diagonal(matrix: &Matrix) -> bool {
    matrix.is_square()
        && matrix.rows().iter().enumerate().all(|(i, row)| {
            row.iter()
                .enumerate()
                .all(|(j, &v)| i == j || v == 0.0)
        })
}

/// Round to two decimal places, ties away from zero
///
/// Rounds the exact decimal value of `value`, so `1.005` (stored as
/// `1.00499999...`) becomes `1.0` while `0.125` becomes `0.13`.
pub fn round_to_cents(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // Only odd multiples of 1/8 sit exactly halfway between two cents.
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        return (value * 100.0).round() / 100.0;
    }

    // `{:.2}` rounds the exact binary value, so non-ties come out right.
    format!("{value:.2}").parse().unwrap_or(value)
}
