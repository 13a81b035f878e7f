//! Fork/join splitter for the parallel triple-loop path.
//!
//! The output row range is divided recursively at its midpoint until a
//! band is at or below the threshold, then computed directly with the
//! kernel. Bands are disjoint `split_at_mut` regions of the one output
//! buffer, so tasks never share a writable cell and the join points are
//! the only synchronization.

use crate::kernel;

/// A unit of work: one contiguous band of output rows and the slice of
/// the result buffer it owns.
struct RowBand<'a> {
    start_row: usize,
    out: &'a mut [i32],
}

/// Fill `out` (the entire `a_rows x b_cols` result) using fork/join
/// row-band decomposition. `threshold` is the band height at which the
/// recursion switches to direct computation; a threshold of zero is
/// treated as one so the recursion always terminates.
pub(crate) fn multiply_banded(
    a: &[i32],
    b: &[i32],
    out: &mut [i32],
    inner: usize,
    b_cols: usize,
    threshold: usize,
) {
    let band = RowBand { start_row: 0, out };
    split(a, b, band, inner, b_cols, threshold.max(1));
}

fn split(a: &[i32], b: &[i32], band: RowBand<'_>, inner: usize, b_cols: usize, threshold: usize) {
    let rows = band.out.len() / b_cols;
    if rows <= threshold {
        kernel::multiply_rows(a, b, band.out, band.start_row, inner, b_cols);
        return;
    }

    let mid = rows / 2;
    let (lower, upper) = band.out.split_at_mut(mid * b_cols);
    let lower = RowBand {
        start_row: band.start_row,
        out: lower,
    };
    let upper = RowBand {
        start_row: band.start_row + mid,
        out: upper,
    };
    rayon::join(
        || split(a, b, lower, inner, b_cols, threshold),
        || split(a, b, upper, inner, b_cols, threshold),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential(a: &[i32], b: &[i32], rows: usize, inner: usize, b_cols: usize) -> Vec<i32> {
        let mut out = vec![0i32; rows * b_cols];
        kernel::multiply_rows(a, b, &mut out, 0, inner, b_cols);
        out
    }

    #[test]
    fn matches_sequential_above_threshold() {
        let rows = 10;
        let inner = 7;
        let cols = 5;
        let a: Vec<i32> = (0..rows * inner).map(|v| v as i32 - 30).collect();
        let b: Vec<i32> = (0..inner * cols).map(|v| (v as i32) * 3 - 40).collect();

        let mut out = vec![0i32; rows * cols];
        // Threshold 1 forces the deepest possible task tree.
        multiply_banded(&a, &b, &mut out, inner, cols, 1);
        assert_eq!(out, sequential(&a, &b, rows, inner, cols));
    }

    #[test]
    fn single_row_is_a_base_case() {
        let a = [2, 3];
        let b = [4, 5];
        let mut out = [0i32; 1];
        multiply_banded(&a, &b, &mut out, 2, 1, 64);
        assert_eq!(out, [23]);
    }

    #[test]
    fn zero_threshold_terminates() {
        let a = [1, 2, 3, 4];
        let b = [5, 6, 7, 8];
        let mut out = [0i32; 4];
        multiply_banded(&a, &b, &mut out, 2, 2, 0);
        assert_eq!(out, [19, 22, 43, 50]);
    }

    #[test]
    fn odd_row_count_splits_cleanly() {
        let rows = 129;
        let inner = 3;
        let cols = 4;
        let a: Vec<i32> = (0..rows * inner).map(|v| (v % 17) as i32).collect();
        let b: Vec<i32> = (0..inner * cols).map(|v| (v % 13) as i32 - 6).collect();

        let mut out = vec![0i32; rows * cols];
        multiply_banded(&a, &b, &mut out, inner, cols, 32);
        assert_eq!(out, sequential(&a, &b, rows, inner, cols));
    }
}
