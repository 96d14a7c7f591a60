//! Application Layer
//!
//! Use cases driving the validator and the statistics engine.

pub mod compute_statistics;
pub mod config;
pub mod rotate_matrix;

// Re-exports
pub use compute_statistics::{ComputeStatisticsUseCase, StatisticsInput};
pub use config::MatrixConfig;
pub use rotate_matrix::{RotateInput, RotateMatrixUseCase};

use crate::domain::{Matrix, Statistics};

/// Matrix handed back to the caller together with its statistics
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixReport {
    pub matrix: Matrix,
    pub statistics: Statistics,
}
