//! Deterministic workload generation for benchmarks and cross-checks.

use matmul_core::Matrix;

/// The benchmark workload pattern: `m[i][j] = (i * j) % 100`.
///
/// Deterministic so repeated runs time the exact same computation.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn workload(size: usize) -> Matrix {
    Matrix::from_fn(size, size, |i, j| ((i * j) % 100) as i32)
}

/// Equivalence-scenario operand: `m[i][j] = i + j`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn index_sum(size: usize) -> Matrix {
    Matrix::from_fn(size, size, |i, j| (i + j) as i32)
}

/// Equivalence-scenario operand: `m[i][j] = i - j`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub fn index_diff(size: usize) -> Matrix {
    Matrix::from_fn(size, size, |i, j| i as i32 - j as i32)
}
