//! Matrix Value Type
//!
//! A rectangular, row-major matrix of finite numbers. Once built it is never
//! mutated; operations return new values.

use crate::error::ValidationError;

/// Matrix shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: usize,
    pub columns: usize,
}

/// Rectangular matrix of finite `f64` values
///
/// Invariant: every row has exactly `columns` elements. A matrix with zero
/// rows is the distinguished empty matrix.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Matrix {
    rows: Vec<Vec<f64>>,
    columns: usize,
}

impl Matrix {
    /// The matrix with no rows
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a matrix from rows, checking shape and finiteness
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ValidationError> {
        let columns = rows.first().map_or(0, Vec::len);

        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(ValidationError::RowLengthMismatch {
                    row: i,
                    expected: columns,
                    found: row.len(),
                });
            }
            if let Some(j) = row.iter().position(|v| !v.is_finite()) {
                return Err(ValidationError::InvalidElement { row: i, column: j });
            }
        }

        Ok(Self { rows, columns })
    }

    /// Caller guarantees the invariant (used by the validator and rotation)
    pub(crate) fn from_checked_rows(rows: Vec<Vec<f64>>, columns: usize) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns));
        let columns = if rows.is_empty() { 0 } else { columns };
        Self { rows, columns }
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        if self.rows.is_empty() { 0 } else { self.columns }
    }

    /// True for the matrix with zero rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn element_count(&self) -> usize {
        self.row_count() * self.column_count()
    }

    /// Shape, or `None` for the empty matrix
    pub fn dimensions(&self) -> Option<Dimensions> {
        (!self.is_empty()).then(|| Dimensions {
            rows: self.row_count(),
            columns: self.column_count(),
        })
    }

    pub fn is_square(&self) -> bool {
        !self.is_empty() && self.row_count() == self.column_count()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(column)).copied()
    }

    /// All elements in row-major order
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }

    /// Rotate 90 degrees clockwise
    ///
    /// An `r x c` matrix becomes `c x r` with `out[j][r - 1 - i] = self[i][j]`.
    pub fn rotate_clockwise(&self) -> Matrix {
        let rows = self.row_count();
        let columns = self.column_count();

        let rotated: Vec<Vec<f64>> = (0..columns)
            .map(|j| (0..rows).rev().map(|i| self.rows[i][j]).collect())
            .collect();

        Matrix::from_checked_rows(rotated, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    #[test]
    fn test_shape_accessors() {
        let matrix = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert_eq!(matrix.row_count(), 2);
        assert_eq!(matrix.column_count(), 3);
        assert_eq!(matrix.element_count(), 6);
        assert_eq!(
            matrix.dimensions(),
            Some(Dimensions {
                rows: 2,
                columns: 3
            })
        );
        assert!(!matrix.is_square());
        assert_eq!(matrix.get(1, 2), Some(6.0));
        assert_eq!(matrix.get(2, 0), None);
    }

    #[test]
    fn test_values_are_row_major() {
        let matrix = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(matrix.values().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = Matrix::empty();
        assert!(matrix.is_empty());
        assert_eq!(matrix.dimensions(), None);
        assert_eq!(matrix.element_count(), 0);
        assert!(!matrix.is_square());
    }

    #[test]
    fn test_from_rows_rejects_ragged_and_non_finite() {
        assert_eq!(
            Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]),
            Err(ValidationError::RowLengthMismatch {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Matrix::from_rows(vec![vec![1.0, f64::NAN]]),
            Err(ValidationError::InvalidElement { row: 0, column: 1 })
        );
        assert_eq!(
            Matrix::from_rows(vec![vec![f64::INFINITY]]),
            Err(ValidationError::InvalidElement { row: 0, column: 0 })
        );
    }

    #[test]
    fn test_rotate_square() {
        let matrix = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0], &[7.0, 8.0, 9.0]]);
        assert_eq!(
            matrix.rotate_clockwise(),
            m(&[&[7.0, 4.0, 1.0], &[8.0, 5.0, 2.0], &[9.0, 6.0, 3.0]])
        );
    }

    #[test]
    fn test_rotate_rectangular() {
        let matrix = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let rotated = matrix.rotate_clockwise();
        assert_eq!(rotated, m(&[&[4.0, 1.0], &[5.0, 2.0], &[6.0, 3.0]]));
        assert_eq!(rotated.row_count(), 3);
        assert_eq!(rotated.column_count(), 2);
    }

    #[test]
    fn test_rotate_single_and_empty() {
        assert_eq!(m(&[&[5.0]]).rotate_clockwise(), m(&[&[5.0]]));
        assert_eq!(Matrix::empty().rotate_clockwise(), Matrix::empty());
        // Rows without columns rotate to no rows at all.
        assert_eq!(m(&[&[], &[]]).rotate_clockwise(), Matrix::empty());
    }

    #[test]
    fn test_four_rotations_are_identity() {
        let matrix = m(&[&[1.0, 2.0, 3.0, 4.0], &[5.0, 6.0, 7.0, 8.0]]);
        let back = matrix
            .rotate_clockwise()
            .rotate_clockwise()
            .rotate_clockwise()
            .rotate_clockwise();
        assert_eq!(back, matrix);
    }
}
