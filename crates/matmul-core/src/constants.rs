//! Threshold defaults and process exit codes.

/// Default row-band height below which the parallel splitter stops
/// forking and computes the band directly.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Default submatrix dimension at or below which the Strassen recursion
/// falls back to the triple-loop kernel.
pub const DEFAULT_STRASSEN_THRESHOLD: usize = 64;

/// Exit codes for the command-line front end.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Strategy results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
