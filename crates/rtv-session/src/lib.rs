//! # rtv-session
//!
//! The television session: power, volume, mute, view, and channel tuning
//! over a goal lineup, with sound cues emitted as transition side effects.
//!
//! All transitions run against a single [`Session`] value — one logical
//! writer, no locking needed in single-threaded use. The async create-goal
//! flow works over a [`SharedSession`] so power and navigation stay
//! responsive while the naming service call is in flight.
//!
//! ## Key components
//!
//! - [`TvState`] — the raw dial positions (power, volume, mute, view, channel)
//! - [`Session`] — the state machine: transitions plus cue policy
//! - [`SoundSink`] — trait for the fire-and-forget cue collaborator
//! - [`ProgramNamer`] — trait for the external auto-naming capability
//! - [`create_goal`] — the suspended create flow over a [`SharedSession`]

pub mod cues;
pub mod error;
pub mod namer;
pub mod session;
pub mod state;

pub use cues::{ConsoleSink, CueKind, NullSink, SoundSink};
pub use error::SessionError;
pub use namer::{ProgramListing, ProgramNamer};
pub use session::{
    create_goal, Session, SharedSession, TuneDirection, TuneRequest, DEFAULT_TOTAL_STEPS,
    RETUNE_DELAY,
};
pub use state::{TvState, View};
