//! Error handling and exit codes.

use corrlab_core::constants::exit_codes;
use corrlab_core::error::CorrError;

/// Exit code for a core error.
#[must_use]
pub fn handle_error(err: &CorrError) -> i32 {
    match err {
        CorrError::Cancelled => exit_codes::ERROR_CANCELED,
        e if e.is_degenerate() => exit_codes::ERROR_DEGENERATE,
        e if e.is_config() => exit_codes::ERROR_CONFIG,
        _ => exit_codes::ERROR_GENERIC,
    }
}

/// Exit code for an application error: the first `CorrError` in its chain
/// decides, anything else is generic.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<CorrError>())
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

/// Whether the error was already shown to the user by a presenter.
#[must_use]
pub fn already_presented(err: &anyhow::Error) -> bool {
    exit_code(err) == exit_codes::ERROR_DEGENERATE
}
