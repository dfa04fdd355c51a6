//! Error handling and exit codes.

use strassen_core::constants::exit_codes;
use strassen_core::CoreError;

use crate::payload::PayloadError;

/// Exit code for a multiplication error.
#[must_use]
pub fn handle_error(err: &CoreError) -> i32 {
    if err.is_invalid_input() {
        return exit_codes::ERROR_INVALID_INPUT;
    }
    match err {
        CoreError::Overflow(_) => exit_codes::ERROR_GENERIC,
        CoreError::Config(_) => exit_codes::ERROR_CONFIG,
        CoreError::Cancelled => exit_codes::ERROR_CANCELED,
        CoreError::Timeout(_) => exit_codes::ERROR_TIMEOUT,
        CoreError::Mismatch => exit_codes::ERROR_MISMATCH,
        CoreError::InvalidOrder(_)
        | CoreError::DimensionMismatch { .. }
        | CoreError::Malformed { .. } => exit_codes::ERROR_INVALID_INPUT,
    }
}

/// Exit code for any error surfaced by `app::run`.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(core) = err.downcast_ref::<CoreError>() {
        handle_error(core)
    } else if err.downcast_ref::<PayloadError>().is_some() {
        exit_codes::ERROR_INVALID_INPUT
    } else {
        exit_codes::ERROR_GENERIC
    }
}
