//! Error types for the geoframe crate.

use std::fmt;

use geoframe_linalg::MatrixError;

/// Result type for geoframe operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting between frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The ECEF-from-ENU transform for a reference point could not be
    /// inverted. Only happens when the reference is not a finite position.
    Matrix(MatrixError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Matrix(e) => write!(f, "local frame transform error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Matrix(e) => Some(e),
        }
    }
}

impl From<MatrixError> for Error {
    fn from(e: MatrixError) -> Self {
        Error::Matrix(e)
    }
}
