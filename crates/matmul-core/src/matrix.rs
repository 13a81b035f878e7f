//! The matrix entity: an immutable, row-major `i32` container.
//!
//! Construction deep-copies the caller's grid and accessors return fresh
//! copies, so no external mutation can ever reach the internal storage.
//! Element arithmetic throughout the crate is two's-complement wrapping,
//! matching 32-bit integer semantics.

use std::fmt;

use crate::error::MatError;

/// A dense `rows x cols` matrix of `i32` values.
///
/// Dimensions are fixed at construction; there is no mutation API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<i32>,
}

impl Matrix {
    /// Build a matrix from a grid of rows, deep-copying the input.
    ///
    /// Validation is eager: an empty grid (or empty first row) is
    /// rejected with [`MatError::Empty`], and any row whose length
    /// differs from the first row's is rejected with
    /// [`MatError::RaggedRows`] before any element is copied.
    pub fn from_rows(grid: &[Vec<i32>]) -> Result<Self, MatError> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(MatError::Empty);
        }
        for (row, r) in grid.iter().enumerate() {
            if r.len() != cols {
                return Err(MatError::RaggedRows {
                    row,
                    expected: cols,
                    found: r.len(),
                });
            }
        }

        let mut data = Vec::with_capacity(rows * cols);
        for r in grid {
            data.extend_from_slice(r);
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix by evaluating `f(row, col)` for every cell.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn from_fn<F>(rows: usize, cols: usize, f: F) -> Self
    where
        F: Fn(usize, usize) -> i32,
    {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be non-zero");
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    /// Build an all-zero matrix.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "matrix dimensions must be non-zero");
        Self {
            rows,
            cols,
            data: vec![0; rows * cols],
        }
    }

    /// Wrap an already-validated row-major buffer. Engine-internal.
    pub(crate) fn from_raw(rows: usize, cols: usize, data: Vec<i32>) -> Self {
        debug_assert_eq!(data.len(), rows * cols);
        Self { rows, cols, data }
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

    /// Element at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        assert!(
            row < self.rows && col < self.cols,
            "position ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        self.data[row * self.cols + col]
    }

    /// Snapshot of the grid as a fresh vector of rows.
    ///
    /// The returned rows share no storage with the matrix; mutating them
    /// has no effect on later operations.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.data.chunks_exact(self.cols).map(<[i32]>::to_vec).collect()
    }

    /// Row-major storage, for the multiplication kernels.
    pub(crate) fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Check that `self * rhs` is defined.
    pub(crate) fn check_multiply_compatible(&self, rhs: &Self) -> Result<(), MatError> {
        if self.cols == rhs.rows {
            Ok(())
        } else {
            Err(MatError::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: rhs.rows,
                rhs_cols: rhs.cols,
            })
        }
    }
}

impl fmt::Display for Matrix {
    /// Renders one row per line, e.g. `[1, 2, 3]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks_exact(self.cols) {
            write!(f, "[")?;
            for (j, v) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
