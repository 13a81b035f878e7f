//! Standard O(n³) multiplication engine, sequential or parallel.

use crate::error::MatError;
use crate::kernel;
use crate::matrix::Matrix;
use crate::options::Options;
use crate::parallel;

/// Multiply `a * b` with the classic triple-loop algorithm.
///
/// With `parallel` set, the output row range is divided across rayon
/// fork/join tasks (see the `parallel` module); the call still blocks
/// until every band is complete and the numeric result is identical to
/// the sequential path.
///
/// Fails with [`MatError::DimensionMismatch`] before doing any work if
/// `a.cols() != b.rows()`.
pub fn multiply(a: &Matrix, b: &Matrix, parallel: bool, opts: &Options) -> Result<Matrix, MatError> {
    a.check_multiply_compatible(b)?;

    let rows = a.rows();
    let cols = b.cols();
    let inner = a.cols();

    // Workers accumulate into disjoint row bands of this one buffer;
    // it is fully zeroed before any task starts.
    let mut out = vec![0i32; rows * cols];
    if parallel {
        parallel::multiply_banded(
            a.as_slice(),
            b.as_slice(),
            &mut out,
            inner,
            cols,
            opts.parallel_threshold,
        );
    } else {
        kernel::multiply_rows(a.as_slice(), b.as_slice(), &mut out, 0, inner, cols);
    }

    Ok(Matrix::from_raw(rows, cols, out))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Matrix, Matrix) {
        let a = Matrix::from_rows(&[vec![1, 2], vec![3, 4]]).unwrap();
        let b = Matrix::from_rows(&[vec![5, 6], vec![7, 8]]).unwrap();
        (a, b)
    }

    #[test]
    fn sequential_two_by_two() {
        let (a, b) = fixture();
        let c = multiply(&a, &b, false, &Options::default()).unwrap();
        assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
    }

    #[test]
    fn parallel_two_by_two() {
        let (a, b) = fixture();
        let c = multiply(&a, &b, true, &Options::default()).unwrap();
        assert_eq!(c.to_rows(), vec![vec![19, 22], vec![43, 50]]);
    }

    #[test]
    fn rejects_incompatible_shapes() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(4, 2);
        let err = multiply(&a, &b, false, &Options::default()).unwrap_err();
        assert_eq!(
            err,
            MatError::DimensionMismatch {
                lhs_rows: 2,
                lhs_cols: 3,
                rhs_rows: 4,
                rhs_cols: 2
            }
        );
    }

    #[test]
    fn rectangular_product_shape() {
        let a = Matrix::from_fn(3, 5, |i, j| (i + j) as i32);
        let b = Matrix::from_fn(5, 2, |i, j| (i * 2 + j) as i32);
        let c = multiply(&a, &b, false, &Options::default()).unwrap();
        assert_eq!(c.rows(), 3);
        assert_eq!(c.cols(), 2);
    }

    #[test]
    fn parallel_matches_sequential_on_larger_input() {
        let a = Matrix::from_fn(150, 97, |i, j| (i as i32) - (j as i32) * 2);
        let b = Matrix::from_fn(97, 83, |i, j| (i as i32) * 3 + (j as i32));
        // Threshold well below the row count so real forking happens.
        let opts = Options {
            parallel_threshold: 16,
            ..Options::default()
        };
        let seq = multiply(&a, &b, false, &opts).unwrap();
        let par = multiply(&a, &b, true, &opts).unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn one_by_one() {
        let a = Matrix::from_rows(&[vec![-3]]).unwrap();
        let b = Matrix::from_rows(&[vec![7]]).unwrap();
        let c = multiply(&a, &b, false, &Options::default()).unwrap();
        assert_eq!(c.to_rows(), vec![vec![-21]]);
    }
}
