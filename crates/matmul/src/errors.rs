//! Error handling and exit codes.

use matmul_core::{exit_codes, MatError};

/// Map a run error to the process exit code.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<MatError>() {
        Some(MatError::Config(_)) => exit_codes::ERROR_CONFIG,
        Some(MatError::Mismatch) => exit_codes::ERROR_MISMATCH,
        Some(_) | None => exit_codes::ERROR_GENERIC,
    }
}
