//! Matrix Configuration

/// Service name reported when none is configured
pub const DEFAULT_SERVICE_NAME: &str = "matrix-api";

/// Matrix endpoint settings
#[derive(Debug, Clone)]
pub struct MatrixConfig {
    /// Echoed as `processedBy` in every response
    pub service_name: String,
}

impl Default for MatrixConfig {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }
}

impl MatrixConfig {
    pub fn with_service_name(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
        }
    }
}
