use std::time::Duration;

use sicmatch_domain::SicMatchError;
use tracing::info;

/// Log the completion of a command execution with structured fields.
///
/// # Parameters
/// * `command` - Logical command identifier (e.g. `"classification::predict_sic_codes"`).
/// * `elapsed` - Duration the command execution took.
///
/// The helper keeps our command wrappers concise and the log shape
/// consistent. Callers must avoid forwarding sensitive values in `command`.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration) {
    let duration_ms = elapsed.as_millis() as u64;
    info!(command, duration_ms, "command_execution");
}

/// Convert a `SicMatchError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &SicMatchError) -> &'static str {
    match error {
        SicMatchError::Catalog(_) => "catalog",
        SicMatchError::Config(_) => "config",
        SicMatchError::NotFound(_) => "not_found",
        SicMatchError::InvalidInput(_) => "invalid_input",
        SicMatchError::Internal(_) => "internal",
    }
}
