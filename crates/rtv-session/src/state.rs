// state.rs — TvState: the raw dial positions of the session.
//
// A plain data record. All transition rules (power gating, clamping,
// wraparound, cue policy) live in `session.rs`; this file only defines
// the shape of the state and its power-on defaults.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three top-level screens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// The program guide: every channel listed with its progress.
    Guide,

    /// One channel in detail.
    Channel,

    /// The "new broadcast" form.
    Create,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Guide => write!(f, "guide"),
            View::Channel => write!(f, "channel"),
            View::Create => write!(f, "create"),
        }
    }
}

/// The session's dial positions.
///
/// Invariant: when `view == Channel`, `current_channel_index` is a valid
/// index into a non-empty lineup. The transitions in [`crate::Session`]
/// maintain this; the record itself does not enforce it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TvState {
    /// Power. When off, every transition except the power toggle is a no-op.
    pub is_on: bool,

    /// Volume dial, `0..=10`.
    pub volume: u8,

    /// Index of the tuned channel in the lineup.
    pub current_channel_index: usize,

    /// Which screen the tube is showing.
    pub view: View,

    /// Mute switch. Suppresses every cue except the power thunk.
    pub is_muted: bool,
}

impl Default for TvState {
    fn default() -> Self {
        Self {
            is_on: false,
            volume: 5,
            current_channel_index: 0,
            view: View::Guide,
            is_muted: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_a_cold_set() {
        let state = TvState::default();
        assert!(!state.is_on);
        assert_eq!(state.volume, 5);
        assert_eq!(state.current_channel_index, 0);
        assert_eq!(state.view, View::Guide);
        assert!(!state.is_muted);
    }

    #[test]
    fn view_serializes_snake_case() {
        assert_eq!(serde_json::to_string(&View::Guide).unwrap(), "\"guide\"");
        let v: View = serde_json::from_str("\"create\"").unwrap();
        assert_eq!(v, View::Create);
    }
}
