//! Error types for matrix operations.

use std::fmt;

/// Errors that can occur during matrix construction and inversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// The matrix is empty, not square, or has the wrong shape for the
    /// requested operation.
    InvalidInput {
        context: &'static str,
        detail: String,
    },
    /// No usable pivot could be found for a column during elimination.
    SingularMatrix { column: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { context, detail } => {
                write!(f, "invalid input to {context}: {detail}")
            }
            Self::SingularMatrix { column } => {
                write!(f, "matrix is singular: no usable pivot in column {column}")
            }
        }
    }
}

impl std::error::Error for MatrixError {}

/// Result type for matrix operations.
pub type MatrixResult<T> = Result<T, MatrixError>;
