//! Strassen's sub-cubic multiplication engine.
//!
//! Both operands are zero-padded into squares whose side is the smallest
//! power of two covering every dimension, multiplied recursively with
//! seven sub-products per level, and the `a.rows() x b.cols()` top-left
//! block of the padded product is returned. Zero padding contributes
//! nothing to any dot product, so the visible result is identical to the
//! triple-loop engines.

use tracing::debug;

use crate::block::SquareBlock;
use crate::error::MatError;
use crate::kernel;
use crate::matrix::Matrix;
use crate::options::Options;

/// Multiply `a * b` with Strassen's algorithm, sequential recursion.
///
/// Fails with [`MatError::DimensionMismatch`] before doing any work if
/// `a.cols() != b.rows()`.
pub fn multiply(a: &Matrix, b: &Matrix, opts: &Options) -> Result<Matrix, MatError> {
    multiply_impl(a, b, opts, false)
}

/// Multiply `a * b` with Strassen's algorithm, fanning the seven
/// sub-products of each level out across rayon tasks.
///
/// The result is cell-for-cell identical to [`multiply`]; only the
/// scheduling differs.
pub fn multiply_parallel(a: &Matrix, b: &Matrix, opts: &Options) -> Result<Matrix, MatError> {
    multiply_impl(a, b, opts, true)
}

fn multiply_impl(
    a: &Matrix,
    b: &Matrix,
    opts: &Options,
    parallel: bool,
) -> Result<Matrix, MatError> {
    a.check_multiply_compatible(b)?;

    let max_dim = a.rows().max(a.cols()).max(b.rows()).max(b.cols());
    let padded = max_dim.next_power_of_two();
    debug!(max_dim, padded, "padding operands for strassen recursion");

    let pa = pad(a, padded);
    let pb = pad(b, padded);
    // A zero threshold would recurse past 1x1; clamp so the base case is
    // always reachable.
    let threshold = opts.strassen_threshold.max(1);
    let pc = recurse(&pa, &pb, threshold, parallel);

    Ok(extract(&pc, a.rows(), b.cols()))
}

/// Copy `m` into the top-left corner of a zeroed `size x size` block.
fn pad(m: &Matrix, size: usize) -> SquareBlock {
    let mut out = SquareBlock::zeros(size);
    let src = m.as_slice();
    for (i, row) in src.chunks_exact(m.cols()).enumerate() {
        out.data[i * size..i * size + m.cols()].copy_from_slice(row);
    }
    out
}

/// Truncate the padded product back to the caller-visible shape.
fn extract(c: &SquareBlock, rows: usize, cols: usize) -> Matrix {
    let mut data = Vec::with_capacity(rows * cols);
    for i in 0..rows {
        data.extend_from_slice(&c.data[i * c.n..i * c.n + cols]);
    }
    Matrix::from_raw(rows, cols, data)
}

fn recurse(a: &SquareBlock, b: &SquareBlock, threshold: usize, parallel: bool) -> SquareBlock {
    let n = a.n;
    if n <= threshold {
        let mut out = SquareBlock::zeros(n);
        kernel::multiply_rows(&a.data, &b.data, &mut out.data, 0, n, n);
        return out;
    }

    let (a11, a12, a21, a22) = a.split();
    let (b11, b12, b21, b22) = b.split();

    // Strassen's seven products. They are mutually independent, so the
    // parallel path evaluates them on separate rayon tasks.
    let (m1, m2, m3, m4, m5, m6, m7) = if parallel {
        let ((m1, m2), ((m3, m4), (m5, (m6, m7)))) = rayon::join(
            || {
                rayon::join(
                    || recurse(&a11.add(&a22), &b11.add(&b22), threshold, parallel),
                    || recurse(&a21.add(&a22), &b11, threshold, parallel),
                )
            },
            || {
                rayon::join(
                    || {
                        rayon::join(
                            || recurse(&a11, &b12.sub(&b22), threshold, parallel),
                            || recurse(&a22, &b21.sub(&b11), threshold, parallel),
                        )
                    },
                    || {
                        rayon::join(
                            || recurse(&a11.add(&a12), &b22, threshold, parallel),
                            || {
                                rayon::join(
                                    || recurse(&a21.sub(&a11), &b11.add(&b12), threshold, parallel),
                                    || recurse(&a12.sub(&a22), &b21.add(&b22), threshold, parallel),
                                )
                            },
                        )
                    },
                )
            },
        );
        (m1, m2, m3, m4, m5, m6, m7)
    } else {
        (
            recurse(&a11.add(&a22), &b11.add(&b22), threshold, parallel),
            recurse(&a21.add(&a22), &b11, threshold, parallel),
            recurse(&a11, &b12.sub(&b22), threshold, parallel),
            recurse(&a22, &b21.sub(&b11), threshold, parallel),
            recurse(&a11.add(&a12), &b22, threshold, parallel),
            recurse(&a21.sub(&a11), &b11.add(&b12), threshold, parallel),
            recurse(&a12.sub(&a22), &b21.add(&b22), threshold, parallel),
        )
    };

    let c11 = m1.add(&m4).sub(&m5).add(&m7);
    let c12 = m3.add(&m5);
    let c21 = m2.add(&m4);
    let c22 = m1.add(&m3).sub(&m2).add(&m6);

    SquareBlock::combine(&c11, &c12, &c21, &c22)
}
