//! Matrix Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Matrix value type, validator, statistics engine
//! - `application/` - Statistics and rotation use cases, configuration
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - `POST /statistics` computing max, min, sum, average, element count,
//!   dimensions and the diagonal classification of a matrix
//! - `POST /rotate` rotating a matrix 90 degrees clockwise before computing
//!   its statistics
//!
//! Both endpoints expect the [`auth::AuthenticatedUser`] set by the bearer
//! middleware and answer `{rotatedMatrix, statistics, processedBy, user}`.

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::{DEFAULT_SERVICE_NAME, MatrixConfig};
pub use domain::{Dimensions, Matrix, Statistics, is_diagonal, round_to_cents, validate_matrix};
pub use error::{MatrixError, MatrixResult, ValidationError};
pub use presentation::router::matrix_router;

pub mod models {
    pub use crate::domain::{Dimensions, Matrix, Statistics};
    pub use crate::presentation::dto::*;
}
