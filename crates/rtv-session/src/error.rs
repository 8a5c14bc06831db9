// error.rs — Error types for the session state machine.

use thiserror::Error;

use rtv_goal::GoalError;

/// Errors that can occur during session transitions.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A lineup operation failed (the tuned index escaped the lineup).
    #[error(transparent)]
    Goal(#[from] GoalError),
}
