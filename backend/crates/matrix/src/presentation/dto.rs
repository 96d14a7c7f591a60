//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Dimensions, Matrix, Statistics};

/// POST /api/statistics request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatisticsRequest {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default, rename = "originalDiagonal")]
    pub original_diagonal: Option<bool>,
}

/// POST /api/rotate request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RotateRequest {
    #[serde(default)]
    pub data: Option<Value>,
}

/// Response shared by both matrix endpoints
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixResponse {
    pub rotated_matrix: Vec<Vec<Value>>,
    pub statistics: StatisticsDto,
    pub processed_by: String,
    pub user: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsDto {
    pub max_value: Value,
    pub min_value: Value,
    pub total_sum: Value,
    pub average: Value,
    pub element_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<DimensionsDto>,
    pub is_diagonal: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct DimensionsDto {
    pub rows: usize,
    pub columns: usize,
}

impl From<Dimensions> for DimensionsDto {
    fn from(d: Dimensions) -> Self {
        Self {
            rows: d.rows,
            columns: d.columns,
        }
    }
}

impl From<&Statistics> for StatisticsDto {
    fn from(s: &Statistics) -> Self {
        let number = |v: Option<f64>| v.map_or(Value::Null, json_number);
        Self {
            max_value: number(s.max_value),
            min_value: number(s.min_value),
            total_sum: number(s.total_sum),
            average: number(s.average),
            element_count: s.element_count,
            dimensions: s.dimensions.map(Into::into),
            is_diagonal: s.is_diagonal,
        }
    }
}

/// Render a matrix with [`json_number`] elements
pub fn matrix_to_json(matrix: &Matrix) -> Vec<Vec<Value>> {
    matrix
        .rows()
        .iter()
        .map(|row| row.iter().copied().map(json_number).collect())
        .collect()
}

// 2^53: beyond this not every integer is representable.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Integral values become JSON integers, non-finite values become `null`
pub fn json_number(value: f64) -> Value {
    if !value.is_finite() {
        return Value::Null;
    }
    if value.fract() == 0.0 && value.abs() < MAX_SAFE_INTEGER {
        return Value::from(value as i64);
    }
    serde_json::Number::from_f64(value).map_or(Value::Null, Value::Number)
}
