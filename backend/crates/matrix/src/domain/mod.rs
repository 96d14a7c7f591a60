//! Domain Layer - Matrix shape, validation, statistics
//!
//! This layer contains:
//! - The rectangular [`Matrix`] value type and its rotation
//! - The validator turning arbitrary JSON into a [`Matrix`]
//! - The statistics engine and diagonal classification
//!
//! Everything here is pure and synchronous.

pub mod matrix;
pub mod statistics;
pub mod validation;

pub use matrix::{Dimensions, Matrix};
pub use statistics::{Statistics, is_diagonal, round_to_cents};
pub use validation::validate_matrix;
