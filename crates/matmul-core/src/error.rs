//! Error types for matrix construction and multiplication.

/// Error type for matrix operations.
///
/// Every variant is raised before any computation starts; a failed
/// operation never produces a partial result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatError {
    /// Inner dimensions do not line up for multiplication.
    #[error(
        "matrix dimensions incompatible for multiplication: \
         {lhs_rows}x{lhs_cols} * {rhs_rows}x{rhs_cols}"
    )]
    DimensionMismatch {
        /// Rows of the left operand.
        lhs_rows: usize,
        /// Columns of the left operand.
        lhs_cols: usize,
        /// Rows of the right operand.
        rhs_rows: usize,
        /// Columns of the right operand.
        rhs_cols: usize,
    },

    /// Construction input is not rectangular.
    #[error("row {row} has {found} elements, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row, which all rows must match.
        expected: usize,
        /// Length actually found.
        found: usize,
    },

    /// Construction input has no rows or no columns.
    #[error("matrix must have at least one row and one column")]
    Empty,

    /// Unknown strategy selector or invalid option.
    #[error("configuration error: {0}")]
    Config(String),

    /// Results from different strategies don't match.
    #[error("result mismatch between strategies")]
    Mismatch,
}
