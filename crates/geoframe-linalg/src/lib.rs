//! Dense square-matrix inversion by Gauss-Jordan elimination.
//!
//! This crate provides a small runtime-sized [`Matrix`] type and an
//! [`invert`] routine for it. It is the linear-algebra leaf of `geoframe`,
//! which uses it to invert 4×4 homogeneous transforms, but nothing here is
//! specific to that size.
//!
//! # Design principles
//!
//! - **Synchronous**: No async, no threading primitives
//! - **Non-mutating**: Inversion works on its own copy; the input is never
//!   modified, even when inversion fails
//! - **Explicit failure**: Singular input is an error, never a silently
//!   wrong result
//!
//! # Example
//!
//! ```
//! use geoframe_linalg::{Matrix, invert};
//!
//! let m = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]])?;
//! let inverse = invert(&m)?;
//! assert!(m.matmul(&inverse)?.approx_eq(&Matrix::identity(2), 1e-12));
//! # Ok::<(), geoframe_linalg::MatrixError>(())
//! ```

mod error;
mod invert;
mod matrix;

pub use error::{MatrixError, MatrixResult};
pub use invert::{PIVOT_TOLERANCE, invert};
pub use matrix::Matrix;
