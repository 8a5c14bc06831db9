// cues.rs — Sound cue kinds and the sink collaborator.
//
// The session fires cues as transition side effects and never looks at the
// result: a sink is fire-and-forget. Implementations decide what a cue
// means — log it, synthesize PCM, drop it on the floor.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four interaction cues of the set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CueKind {
    /// Tuning noise — between channels and while the auto-tuner works.
    Static,

    /// Knob / button click.
    Click,

    /// Completion fanfare.
    Success,

    /// The power switch thunk. The only cue audible while powered off.
    Power,
}

impl fmt::Display for CueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CueKind::Static => write!(f, "static"),
            CueKind::Click => write!(f, "click"),
            CueKind::Success => write!(f, "success"),
            CueKind::Power => write!(f, "power"),
        }
    }
}

/// Trait for receiving sound cues.
///
/// `volume` is normalized to `[0.0, 1.0]`. Sinks may ignore a zero volume.
/// The session never observes a return value, so sinks swallow their own
/// failures.
pub trait SoundSink: Send + Sync {
    /// Play a cue. Fire-and-forget.
    fn play(&self, cue: CueKind, volume: f32);
}

/// A sink that discards every cue. Useful as a default and in tests.
#[derive(Debug, Default)]
pub struct NullSink;

impl SoundSink for NullSink {
    fn play(&self, _cue: CueKind, _volume: f32) {}
}

/// Logs each cue through tracing — the "speaker" of a headless session.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl SoundSink for ConsoleSink {
    fn play(&self, cue: CueKind, volume: f32) {
        tracing::info!(%cue, volume, "cue");
    }
}
