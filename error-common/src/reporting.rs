// Error reporting utilities

use crate::types::ClaimsDeskError;

/// Emit a structured error event for `error` under `context`.
///
/// The error text goes through `redact` first: store errors echo record
/// contents, so services hand in their PII redactor here.
pub fn log_error<F>(context: &str, error: &ClaimsDeskError, redact: F)
where
    F: Fn(&str) -> String,
{
    let message = redact(&error.to_string());
    tracing::error!(
        context = context,
        error_code = error.code(),
        error_type = error.error_type(),
        error = %message,
        "ClaimsDesk error occurred"
    );
}
