// error.rs — Error types for the goal lineup subsystem.

use thiserror::Error;

/// Errors that can occur during lineup operations.
#[derive(Debug, Error)]
pub enum GoalError {
    /// A channel index points outside the current lineup.
    #[error("channel index {index} out of range (lineup has {len} channels)")]
    OutOfRange { index: usize, len: usize },
}
