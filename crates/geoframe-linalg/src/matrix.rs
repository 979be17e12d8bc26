//! Dense row-major matrix storage.

use std::ops::{Index, IndexMut};

use glam::DMat4;

use crate::error::{MatrixError, MatrixResult};

/// A dense `rows × cols` matrix of `f64`, stored row-major.
///
/// The shape is a runtime property, so the same type covers the 4×4
/// homogeneous transforms used by the geodetic code and any other square
/// system a caller wants to invert.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Create a matrix from row-major data.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidInput`] if `data` does not hold exactly
    /// `rows * cols` elements.
    pub fn new(rows: usize, cols: usize, data: Vec<f64>) -> MatrixResult<Self> {
        let expected = rows.checked_mul(cols).ok_or_else(|| MatrixError::InvalidInput {
            context: "matrix",
            detail: format!("shape {rows}x{cols} overflows usize"),
        })?;
        if data.len() != expected {
            return Err(MatrixError::InvalidInput {
                context: "matrix",
                detail: format!(
                    "expected {expected} elements for shape {rows}x{cols}, got {}",
                    data.len()
                ),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Create a matrix from a slice of rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidInput`] if the rows have differing
    /// lengths.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> MatrixResult<Self> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MatrixError::InvalidInput {
                    context: "matrix",
                    detail: format!("row {index} has {} columns, expected {cols}", row.len()),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Create a `rows × cols` matrix filled with zeros.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`. Use [`Matrix::new`] to get
    /// an error instead.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let Some(len) = rows.checked_mul(cols) else {
            panic!("shape {rows}x{cols} overflows usize");
        };
        Self {
            rows,
            cols,
            data: vec![0.0; len],
        }
    }

    /// Create the `n × n` identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the matrix has as many rows as columns.
    #[must_use]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Whether the matrix has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow a single row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[must_use]
    pub fn row(&self, row: usize) -> &[f64] {
        assert!(row < self.rows, "row {row} out of bounds for {} rows", self.rows);
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Borrow the row-major element storage.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copy the matrix out as a vector of rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows).map(|r| self.row(r).to_vec()).collect()
    }

    /// Swap two rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for c in 0..self.cols {
            self.data.swap(a * self.cols + c, b * self.cols + c);
        }
    }

    /// Multiply every element of `row` by `factor`.
    pub(crate) fn scale_row(&mut self, row: usize, factor: f64) {
        let cols = self.cols;
        for value in &mut self.data[row * cols..(row + 1) * cols] {
            *value *= factor;
        }
    }

    /// Add `factor` times row `source` to row `target`.
    pub(crate) fn add_scaled_row(&mut self, target: usize, source: usize, factor: f64) {
        debug_assert_ne!(target, source);
        let cols = self.cols;

        // Split the storage so the source row can be read while the target
        // row is written.
        let (src, dst) = if source < target {
            let (head, tail) = self.data.split_at_mut(target * cols);
            (&head[source * cols..(source + 1) * cols], &mut tail[..cols])
        } else {
            let (head, tail) = self.data.split_at_mut(source * cols);
            (&tail[..cols], &mut head[target * cols..(target + 1) * cols])
        };

        for (d, s) in dst.iter_mut().zip(src) {
            *d += factor * s;
        }
    }

    /// Matrix product `self · rhs`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidInput`] if `self.cols() != rhs.rows()`.
    pub fn matmul(&self, rhs: &Matrix) -> MatrixResult<Matrix> {
        if self.cols != rhs.rows {
            return Err(MatrixError::InvalidInput {
                context: "matrix product",
                detail: format!(
                    "cannot multiply {}x{} by {}x{}",
                    self.rows, self.cols, rhs.rows, rhs.cols
                ),
            });
        }

        let mut out = Matrix::zeros(self.rows, rhs.cols);
        for r in 0..self.rows {
            for k in 0..self.cols {
                let lhs = self[(r, k)];
                for c in 0..rhs.cols {
                    out[(r, c)] += lhs * rhs[(k, c)];
                }
            }
        }
        Ok(out)
    }

    /// Whether both matrices have the same shape and every pair of elements
    /// differs by at most `tolerance`.
    #[must_use]
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }

    /// Compute the inverse of this matrix.
    ///
    /// See [`crate::invert`].
    pub fn inverse(&self) -> MatrixResult<Matrix> {
        crate::invert(self)
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

impl From<DMat4> for Matrix {
    fn from(m: DMat4) -> Self {
        // glam stores columns; transpose into row-major order.
        let cols = m.to_cols_array_2d();
        let mut out = Matrix::zeros(4, 4);
        for (c, column) in cols.iter().enumerate() {
            for (r, value) in column.iter().enumerate() {
                out[(r, c)] = *value;
            }
        }
        out
    }
}

impl TryFrom<&Matrix> for DMat4 {
    type Error = MatrixError;

    fn try_from(m: &Matrix) -> MatrixResult<Self> {
        if m.rows != 4 || m.cols != 4 {
            return Err(MatrixError::InvalidInput {
                context: "DMat4 conversion",
                detail: format!("expected a 4x4 matrix, got {}x{}", m.rows, m.cols),
            });
        }
        let mut cols = [[0.0; 4]; 4];
        for (c, column) in cols.iter_mut().enumerate() {
            for (r, value) in column.iter_mut().enumerate() {
                *value = m[(r, c)];
            }
        }
        Ok(DMat4::from_cols_array_2d(&cols))
    }
}
