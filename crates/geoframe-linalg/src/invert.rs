//! Square-matrix inversion by Gauss-Jordan elimination.

use crate::error::{MatrixError, MatrixResult};
use crate::matrix::Matrix;

/// Pivot magnitudes at or below this value are treated as zero.
pub const PIVOT_TOLERANCE: f64 = 2.0 * f64::EPSILON;

/// Invert a square matrix.
///
/// Runs Gauss-Jordan elimination on a working copy of `matrix` alongside an
/// identity matrix. For each column the row with the largest-magnitude entry
/// at or below the diagonal is swapped into the pivot position, the pivot row
/// is normalized, and the column is cleared from every other row. When the
/// working copy has been reduced to the identity, the companion matrix holds
/// the inverse.
///
/// `matrix` is never modified, on success or on error.
///
/// Runs in O(n³) time with O(n²) extra space.
///
/// # Errors
///
/// - [`MatrixError::InvalidInput`] if `matrix` is empty or not square. No
///   elimination is attempted in that case.
/// - [`MatrixError::SingularMatrix`] if some column has no entry with
///   magnitude above [`PIVOT_TOLERANCE`] in the rows still available for
///   pivoting. `NaN` entries never qualify as pivots.
pub fn invert(matrix: &Matrix) -> MatrixResult<Matrix> {
    if matrix.is_empty() {
        tracing::debug!(
            rows = matrix.rows(),
            cols = matrix.cols(),
            "refusing to invert empty matrix"
        );
        return Err(MatrixError::InvalidInput {
            context: "invert",
            detail: format!(
                "expected a non-empty matrix, got {}x{}",
                matrix.rows(),
                matrix.cols()
            ),
        });
    }
    if !matrix.is_square() {
        tracing::debug!(
            rows = matrix.rows(),
            cols = matrix.cols(),
            "refusing to invert non-square matrix"
        );
        return Err(MatrixError::InvalidInput {
            context: "invert",
            detail: format!(
                "expected a square matrix, got {}x{}",
                matrix.rows(),
                matrix.cols()
            ),
        });
    }

    let n = matrix.rows();
    let mut work = matrix.clone();
    let mut result = Matrix::identity(n);

    for column in 0..n {
        let Some(pivot_row) = find_pivot(&work, column) else {
            tracing::debug!(column, n, "no usable pivot, matrix is singular");
            return Err(MatrixError::SingularMatrix { column });
        };

        if pivot_row != column {
            tracing::trace!(column, pivot_row, "swapping pivot row");
            work.swap_rows(column, pivot_row);
            result.swap_rows(column, pivot_row);
        }

        // Normalize the pivot row so the pivot becomes 1.
        let scale = 1.0 / work[(column, column)];
        work.scale_row(column, scale);
        result.scale_row(column, scale);

        // Clear the pivot column from every other row.
        for row in 0..n {
            if row == column {
                continue;
            }
            let factor = -work[(row, column)];
            work.add_scaled_row(row, column, factor);
            result.add_scaled_row(row, column, factor);
        }
    }

    Ok(result)
}

/// Find the row at or below `column` with the largest entry in `column`.
///
/// Returns `None` if no candidate exceeds [`PIVOT_TOLERANCE`]. Ties keep the
/// earliest row so an already usable diagonal is not swapped needlessly.
fn find_pivot(work: &Matrix, column: usize) -> Option<usize> {
    (column..work.rows())
        .map(|row| (row, work[(row, column)].abs()))
        .reduce(|best, candidate| {
            if candidate.1 > best.1 {
                candidate
            } else {
                best
            }
        })
        .filter(|&(_, magnitude)| magnitude > PIVOT_TOLERANCE)
        .map(|(row, _)| row)
}
