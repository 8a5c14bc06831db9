// error.rs — Error types for cue rendering and WAV output.

use thiserror::Error;

/// Errors that can occur while writing rendered cues.
#[derive(Debug, Error)]
pub enum AudioError {
    /// A file I/O operation failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}
