// session.rs — Session: the TV state machine.
//
// One logical writer mutates a Session; transitions are atomic with respect
// to each other because input events arrive one at a time. The only
// suspension point is the create-goal flow, which runs over a SharedSession
// so power and navigation remain live while the naming call is in flight.
//
// Cue policy (applies to every transition):
//   - the Power cue is never suppressed — it is how you turn the set on
//   - every other cue is dropped while muted or powered off

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;

use rtv_goal::{Goal, GoalStore, ProgressUpdate};

use crate::cues::{CueKind, SoundSink};
use crate::error::SessionError;
use crate::namer::ProgramNamer;
use crate::state::{TvState, View};

/// Tuning noise plays first; the picture changes this much later.
pub const RETUNE_DELAY: Duration = Duration::from_millis(150);

/// Target step count for goals created through the auto-tuner.
pub const DEFAULT_TOTAL_STEPS: u32 = 10;

/// Shared handle for flows that suspend (create-goal). Single logical
/// writer: each transition takes the lock, mutates, releases.
pub type SharedSession = Arc<Mutex<Session>>;

/// Which way the channel knob turned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuneDirection {
    Up,
    Down,
}

/// A scheduled channel change: the static cue has already fired; the caller
/// applies this via [`Session::complete_tune`] after `delay` to land the
/// picture. Tests may apply it immediately — only the ordering matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuneRequest {
    pub target_index: usize,
    pub delay: Duration,
}

/// The television session: dial state, the channel lineup, and the speaker.
pub struct Session {
    state: TvState,
    goals: GoalStore,
    sink: Arc<dyn SoundSink>,
}

impl Session {
    /// Create a session over a lineup, powered off with default dials.
    pub fn new(goals: GoalStore, sink: Arc<dyn SoundSink>) -> Self {
        Self {
            state: TvState::default(),
            goals,
            sink,
        }
    }

    /// Current dial positions.
    pub fn state(&self) -> &TvState {
        &self.state
    }

    /// The channel lineup.
    pub fn goals(&self) -> &GoalStore {
        &self.goals
    }

    /// The goal on the tuned channel, if the lineup is non-empty.
    pub fn active_goal(&self) -> Option<&Goal> {
        self.goals.get(self.state.current_channel_index).ok()
    }

    /// Flip the power switch. Always permitted, always audible.
    pub fn toggle_power(&mut self) {
        self.cue(CueKind::Power);
        self.state.is_on = !self.state.is_on;
        tracing::debug!(is_on = self.state.is_on, "power toggled");
    }

    /// Turn the channel knob one notch, wrapping at the ends of the lineup.
    ///
    /// Emits the static cue immediately and returns the scheduled retune;
    /// the index and view change only when the caller applies it. Returns
    /// `None` when powered off or when there is nothing to tune to.
    pub fn navigate_channel(&mut self, direction: TuneDirection) -> Option<TuneRequest> {
        if !self.state.is_on || self.goals.is_empty() {
            return None;
        }

        let len = self.goals.len();
        let current = self.state.current_channel_index;
        let target_index = match direction {
            TuneDirection::Up => (current + 1) % len,
            TuneDirection::Down => current.checked_sub(1).unwrap_or(len - 1),
        };

        self.cue(CueKind::Static);
        Some(TuneRequest {
            target_index,
            delay: RETUNE_DELAY,
        })
    }

    /// Land a scheduled retune: set the channel index and show the channel.
    ///
    /// Dropped silently if the set was powered off while the tuner spun.
    pub fn complete_tune(&mut self, request: TuneRequest) {
        if !self.state.is_on {
            return;
        }
        self.state.current_channel_index = request.target_index;
        self.state.view = View::Channel;
        tracing::debug!(index = request.target_index, "retuned");
    }

    /// Tune straight to the channel carrying the goal with this id.
    /// Returns whether the goal was found; unknown ids are a no-op.
    pub fn select_channel(&mut self, id: &str) -> bool {
        if !self.state.is_on {
            return false;
        }
        match self.goals.position_of(id) {
            Some(index) => {
                self.cue(CueKind::Click);
                self.state.current_channel_index = index;
                self.state.view = View::Channel;
                true
            }
            None => false,
        }
    }

    /// The continuous channel selector: jump straight to an index, clamped
    /// into the lineup. No wraparound, no retune delay.
    pub fn set_channel_direct(&mut self, index: usize) {
        if !self.state.is_on || self.goals.is_empty() {
            return;
        }
        self.cue(CueKind::Click);
        self.state.current_channel_index = index.min(self.goals.len() - 1);
        self.state.view = View::Channel;
    }

    /// Set the volume dial, clamped to `0..=10`. Works even when powered
    /// off — a physical knob turns regardless. No cue.
    pub fn set_volume(&mut self, value: u8) {
        self.state.volume = value.min(10);
    }

    /// Flip the mute switch. No cue.
    pub fn toggle_mute(&mut self) {
        self.state.is_muted = !self.state.is_muted;
    }

    /// Switch to a view. Only when powered on; emits a click.
    pub fn set_view(&mut self, view: View) {
        if !self.state.is_on {
            return;
        }
        self.cue(CueKind::Click);
        self.state.view = view;
    }

    /// Advance the tuned goal by `delta` steps.
    ///
    /// Emits the success fanfare when this call completes the goal, a click
    /// on a partial advance, and nothing when the goal was already done.
    /// Returns `None` without touching anything when powered off.
    pub fn update_active_goal_progress(
        &mut self,
        delta: u32,
    ) -> Result<Option<ProgressUpdate>, SessionError> {
        if !self.state.is_on {
            return Ok(None);
        }

        let update = self
            .goals
            .update_progress(self.state.current_channel_index, delta)?;

        match update {
            ProgressUpdate::Advanced { completed: true } => self.cue(CueKind::Success),
            ProgressUpdate::Advanced { completed: false } => self.cue(CueKind::Click),
            ProgressUpdate::AlreadyComplete => {}
        }
        Ok(Some(update))
    }

    /// Fire a cue through the sink, subject to the gating policy.
    fn cue(&self, kind: CueKind) {
        if kind != CueKind::Power && (!self.state.is_on || self.state.is_muted) {
            return;
        }
        self.sink.play(kind, f32::from(self.state.volume) / 10.0);
    }
}

/// The create-goal flow: auto-name the user's raw text and append the
/// resulting goal to the lineup.
///
/// Whitespace-only input is a complete no-op. Otherwise the static cue
/// fires (the tuner is searching), the lock is released while the namer
/// runs, and on completion the goal lands with zero progress and a
/// [`DEFAULT_TOTAL_STEPS`] target, the guide comes up, and the success
/// fanfare plays. There is no cancellation: a result arriving after the
/// user has navigated away is still applied.
///
/// Returns the id of the appended goal, or `None` for empty input.
pub async fn create_goal<N: ProgramNamer>(
    session: &SharedSession,
    namer: &N,
    input: &str,
) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    {
        let locked = session.lock().await;
        locked.cue(CueKind::Static);
    }

    // Lock released: power and navigation stay live while the namer runs.
    let listing = namer.name_program(trimmed).await;

    let mut locked = session.lock().await;
    let goal = Goal::new(
        listing.title,
        listing.description,
        listing.category,
        DEFAULT_TOTAL_STEPS,
    );
    let id = goal.id.clone();
    locked.goals.append(goal);
    locked.state.view = View::Guide;
    locked.cue(CueKind::Success);
    tracing::info!(id = %id, "new broadcast added to the guide");
    Some(id)
}
