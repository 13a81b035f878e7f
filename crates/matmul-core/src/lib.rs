//! # matmul-core
//!
//! Dense integer matrix multiplication with three interchangeable
//! strategies: the classic triple loop (sequential or fork/join
//! parallel) and Strassen's recursive sub-cubic algorithm with
//! power-of-two padding.
//!
//! Elements are `i32` and every engine uses wrapping arithmetic, so all
//! strategies produce bit-identical results on any compatible input.

pub(crate) mod block;
pub mod constants;
pub mod error;
pub(crate) mod kernel;
pub mod matrix;
pub mod options;
pub(crate) mod parallel;
pub mod standard;
pub mod strassen;
pub mod strategy;

// Re-exports
pub use constants::{exit_codes, DEFAULT_PARALLEL_THRESHOLD, DEFAULT_STRASSEN_THRESHOLD};
pub use error::MatError;
pub use matrix::Matrix;
pub use options::Options;
pub use strategy::{for_selector, Multiply};

/// Multiply two matrices with the sequential standard engine and default
/// options.
///
/// This is a convenience function for simple use cases. For parallel
/// execution, Strassen, or threshold tuning, use the engine modules or
/// the [`strategy`] layer directly.
///
/// # Example
/// ```
/// use matmul_core::Matrix;
///
/// let a = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(&[vec![5, 6], vec![7, 8]]).unwrap();
/// let c = matmul_core::multiply(&a, &b).unwrap();
/// assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
/// ```
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatError> {
    standard::multiply(a, b, false, &Options::default())
}
