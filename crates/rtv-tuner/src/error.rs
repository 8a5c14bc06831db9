// error.rs — Error types for the naming adapter.
//
// These never escape the adapter: `ProgramNamer::name_program` resolves
// every one of them to the interrupted-broadcast fallback. They exist so
// the failure can be logged with a reason before it is swallowed.

use thiserror::Error;

/// Errors that can occur while calling the naming service.
#[derive(Debug, Error)]
pub enum TunerError {
    /// The HTTP request itself failed (connect, TLS, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("naming service returned status {0}")]
    Status(reqwest::StatusCode),

    /// The response carried no candidate text at all.
    #[error("empty response from the naming service")]
    EmptyResponse,

    /// The candidate text was not a valid listing payload.
    #[error("malformed listing payload: {0}")]
    Malformed(#[from] serde_json::Error),
}
